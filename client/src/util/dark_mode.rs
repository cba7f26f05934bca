//! Theme preference initialization and toggle.
//!
//! Reads the persisted `theme` preference (`"dark"` / `"light"`) and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back through
//! the same local flag. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::{BrowserStore, KeyValueStore, LocalFlag};

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Theme flag over any key-value store.
pub fn theme_flag<S: KeyValueStore>(store: S) -> LocalFlag<S> {
    LocalFlag::new(store, THEME_KEY, "dark", "light")
}

/// Resolve the preference: stored value first, then the system preference.
pub fn resolve_preference(stored: Option<bool>, system_prefers_dark: bool) -> bool {
    stored.unwrap_or(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the user previously chose dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    resolve_preference(theme_flag(BrowserStore).read(), system_prefers_dark())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    toggle_in(&theme_flag(BrowserStore), current)
}

/// Toggle against an explicit flag.
pub fn toggle_in<S: KeyValueStore>(flag: &LocalFlag<S>, current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(e) = flag.write(next) {
        #[cfg(feature = "hydrate")]
        log::warn!("theme preference not saved: {e}");
        #[cfg(not(feature = "hydrate"))]
        let _ = e;
    }
    next
}
