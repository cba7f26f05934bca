//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `conferences`, `ui`) so individual
//! components can depend on small focused models.

pub mod conferences;
pub mod session;
pub mod ui;
