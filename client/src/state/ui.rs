//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session and listing state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme and the admin sidebar.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
}
