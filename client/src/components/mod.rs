//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render admin chrome and listing surfaces while reading shared
//! state from Leptos context providers.

pub mod admin_layout;
pub mod conference_card;
pub mod stats_grid;
pub mod status_badge;
