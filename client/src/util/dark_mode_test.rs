#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}

#[test]
fn stored_preference_wins_over_system() {
    assert!(resolve_preference(Some(true), false));
    assert!(!resolve_preference(Some(false), true));
}

#[test]
fn system_preference_used_when_unset() {
    assert!(resolve_preference(None, true));
    assert!(!resolve_preference(None, false));
}

#[test]
fn toggle_in_persists_dark_and_light() {
    let store = MemoryStore::new();
    let flag = theme_flag(store.clone());

    assert!(toggle_in(&flag, false));
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

    assert!(!toggle_in(&flag, true));
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(flag.read(), Some(false));
}
