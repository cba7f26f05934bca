use super::*;
use crate::util::session_store::{SessionMarker, TOKEN_KEY, USER_KEY};
use crate::util::storage::MemoryStore;

fn gate_over(backend: &MemoryStore) -> SessionGate<MemoryStore> {
    SessionGate::new(SessionStore::new(backend.clone()))
}

/// Drive one mount the way a protected view does: redirect or render, never both.
fn mount_and_record(gate: &mut SessionGate<MemoryStore>, events: &mut Vec<String>) {
    match gate.mount() {
        GateDecision::Redirect(path) => events.push(format!("redirect:{path}")),
        GateDecision::Render => events.push(format!("render:{}", gate.display_identity())),
    }
}

// =============================================================
// mount
// =============================================================

#[test]
fn gate_starts_unknown() {
    let gate = gate_over(&MemoryStore::new());
    assert_eq!(gate.state(), &GateState::Unknown);
}

#[test]
fn mount_with_empty_storage_denies_and_redirects_before_render() {
    let mut gate = gate_over(&MemoryStore::new());
    let mut events = Vec::new();
    mount_and_record(&mut gate, &mut events);
    assert_eq!(gate.state(), &GateState::Denied);
    assert_eq!(events, vec![format!("redirect:{LOGIN_PATH}")]);
}

#[test]
fn mount_with_marker_authorizes_and_shows_email() {
    let backend = MemoryStore::new();
    SessionStore::new(backend.clone())
        .write(&SessionMarker::new("tok", "a@b.com"))
        .unwrap();
    let mut gate = gate_over(&backend);
    let mut events = Vec::new();
    mount_and_record(&mut gate, &mut events);
    assert!(gate.state().is_authorized());
    assert_eq!(events, vec!["render:a@b.com".to_owned()]);
}

#[test]
fn mount_with_malformed_user_denies() {
    let backend = MemoryStore::new();
    backend.set(TOKEN_KEY, "tok").unwrap();
    backend.set(USER_KEY, "not-json").unwrap();
    let mut gate = gate_over(&backend);
    assert_eq!(gate.mount(), GateDecision::Redirect(LOGIN_PATH));
}

#[test]
fn remount_rereads_storage() {
    let backend = MemoryStore::new();
    let mut gate = gate_over(&backend);
    assert_eq!(gate.mount(), GateDecision::Redirect(LOGIN_PATH));

    SessionStore::new(backend.clone())
        .write(&SessionMarker::new("tok", "a@b.com"))
        .unwrap();
    assert_eq!(gate.mount(), GateDecision::Render);
}

// =============================================================
// cross-tab notifications
// =============================================================

#[test]
fn logout_in_other_tab_denies_without_remount() {
    let profile = MemoryStore::new();
    let tab_b = SessionStore::new(profile.clone());
    tab_b.write(&SessionMarker::new("tok", "a@b.com")).unwrap();

    let mut tab_a = gate_over(&profile);
    assert_eq!(tab_a.mount(), GateDecision::Render);

    tab_b.clear();
    assert_eq!(tab_a.on_storage_change(Some(USER_KEY)), Some(GateDecision::Redirect(LOGIN_PATH)));
    assert_eq!(tab_a.state(), &GateState::Denied);
}

#[test]
fn login_in_other_tab_authorizes() {
    let profile = MemoryStore::new();
    let mut tab_a = gate_over(&profile);
    assert_eq!(tab_a.mount(), GateDecision::Redirect(LOGIN_PATH));

    SessionStore::new(profile.clone())
        .write(&SessionMarker::new("tok", "b@c.com"))
        .unwrap();
    assert_eq!(tab_a.on_storage_change(Some(TOKEN_KEY)), Some(GateDecision::Render));
    assert_eq!(tab_a.display_identity(), "b@c.com");
}

#[test]
fn storage_clear_notification_has_no_key_and_reevaluates() {
    let profile = MemoryStore::new();
    SessionStore::new(profile.clone())
        .write(&SessionMarker::new("tok", "a@b.com"))
        .unwrap();
    let mut tab_a = gate_over(&profile);
    tab_a.mount();

    SessionStore::new(profile.clone()).clear();
    assert_eq!(tab_a.on_storage_change(None), Some(GateDecision::Redirect(LOGIN_PATH)));
}

#[test]
fn unrelated_key_change_is_ignored() {
    let profile = MemoryStore::new();
    SessionStore::new(profile.clone())
        .write(&SessionMarker::new("tok", "a@b.com"))
        .unwrap();
    let mut tab_a = gate_over(&profile);
    tab_a.mount();

    assert_eq!(tab_a.on_storage_change(Some("theme")), None);
    assert!(tab_a.state().is_authorized());
}

#[test]
fn latest_notification_wins() {
    let profile = MemoryStore::new();
    let other_tab = SessionStore::new(profile.clone());
    let mut tab_a = gate_over(&profile);

    other_tab.write(&SessionMarker::new("tok", "a@b.com")).unwrap();
    other_tab.clear();
    // Both notifications arrive after both writes; each re-reads current storage.
    assert_eq!(tab_a.on_storage_change(Some(TOKEN_KEY)), Some(GateDecision::Redirect(LOGIN_PATH)));
    assert_eq!(tab_a.on_storage_change(Some(USER_KEY)), Some(GateDecision::Redirect(LOGIN_PATH)));
    assert!(tab_a.state().is_denied());
}

#[test]
fn storage_change_relevance() {
    assert!(storage_change_is_relevant(None));
    assert!(storage_change_is_relevant(Some(TOKEN_KEY)));
    assert!(storage_change_is_relevant(Some(USER_KEY)));
    assert!(!storage_change_is_relevant(Some("theme")));
}

// =============================================================
// sign-out
// =============================================================

#[test]
fn sign_out_clears_then_navigates_to_login() {
    let backend = MemoryStore::new();
    let store = SessionStore::new(backend.clone());
    store.write(&SessionMarker::new("tok", "a@b.com")).unwrap();

    let mut navigated = None;
    sign_out(&store, |path| {
        assert_eq!(store.read(), None, "store must be cleared before navigation");
        navigated = Some(path.to_owned());
    });
    assert_eq!(navigated.as_deref(), Some(LOGIN_PATH));
    assert!(backend.is_empty());
}

#[test]
fn gate_sign_out_denies_and_next_mount_redirects() {
    let backend = MemoryStore::new();
    SessionStore::new(backend.clone())
        .write(&SessionMarker::new("tok", "a@b.com"))
        .unwrap();
    let mut gate = gate_over(&backend);
    assert_eq!(gate.mount(), GateDecision::Render);

    assert_eq!(gate.sign_out(), LOGIN_PATH);
    assert!(gate.state().is_denied());
    assert_eq!(gate.mount(), GateDecision::Redirect(LOGIN_PATH));
}

#[test]
fn decision_for_unknown_state_is_redirect() {
    assert_eq!(GateDecision::for_state(&GateState::Unknown), GateDecision::Redirect(LOGIN_PATH));
}

// =============================================================
// GateDriver (what install_session_gate runs)
// =============================================================

type Visits = Rc<RefCell<Vec<(String, bool)>>>;

fn driver_over(
    backend: &MemoryStore,
    gate: RwSignal<GateState>,
) -> (GateDriver<MemoryStore, impl Fn(&str, NavigateOptions) + use<>>, Visits) {
    let visits: Visits = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&visits);
    let driver = GateDriver::new(SessionStore::new(backend.clone()), gate, move |path: &str, opts: NavigateOptions| {
        recorder.borrow_mut().push((path.to_owned(), opts.replace));
    });
    (driver, visits)
}

#[test]
fn driver_mount_without_marker_denies_and_redirects_with_replace() {
    Owner::new().with(|| {
        let gate = RwSignal::new(GateState::Unknown);
        let (mut driver, visits) = driver_over(&MemoryStore::new(), gate);

        driver.sync(&gate.get_untracked());
        assert_eq!(gate.get_untracked(), GateState::Denied);
        assert_eq!(*visits.borrow(), vec![(LOGIN_PATH.to_owned(), true)]);
    });
}

#[test]
fn driver_mount_with_marker_authorizes_without_navigation() {
    Owner::new().with(|| {
        let backend = MemoryStore::new();
        SessionStore::new(backend.clone())
            .write(&SessionMarker::new("tok", "a@b.com"))
            .unwrap();
        let gate = RwSignal::new(GateState::Unknown);
        let (mut driver, visits) = driver_over(&backend, gate);

        driver.sync(&gate.get_untracked());
        assert!(gate.get_untracked().is_authorized());
        assert_eq!(gate.get_untracked().display_identity(), "a@b.com");
        assert!(visits.borrow().is_empty());
    });
}

#[test]
fn driver_ignores_its_own_published_state() {
    Owner::new().with(|| {
        let gate = RwSignal::new(GateState::Unknown);
        let (mut driver, visits) = driver_over(&MemoryStore::new(), gate);

        driver.sync(&gate.get_untracked());
        // The effect re-runs after the driver's own write; no second redirect.
        driver.sync(&gate.get_untracked());
        assert_eq!(visits.borrow().len(), 1);
    });
}

#[test]
fn driver_redirects_after_cross_tab_logout() {
    Owner::new().with(|| {
        let profile = MemoryStore::new();
        let other_tab = SessionStore::new(profile.clone());
        other_tab.write(&SessionMarker::new("tok", "a@b.com")).unwrap();
        let gate = RwSignal::new(GateState::Unknown);
        let (mut driver, visits) = driver_over(&profile, gate);
        driver.sync(&gate.get_untracked());
        assert!(gate.get_untracked().is_authorized());

        other_tab.clear();
        driver.storage_changed(Some("theme"));
        assert!(gate.get_untracked().is_authorized());
        assert!(visits.borrow().is_empty());

        driver.storage_changed(Some(TOKEN_KEY));
        assert_eq!(gate.get_untracked(), GateState::Denied);
        assert_eq!(*visits.borrow(), vec![(LOGIN_PATH.to_owned(), true)]);
    });
}

#[test]
fn driver_authorizes_after_cross_tab_login() {
    Owner::new().with(|| {
        let profile = MemoryStore::new();
        let gate = RwSignal::new(GateState::Unknown);
        let (mut driver, _visits) = driver_over(&profile, gate);
        driver.sync(&gate.get_untracked());

        SessionStore::new(profile.clone())
            .write(&SessionMarker::new("tok", "b@c.com"))
            .unwrap();
        driver.storage_changed(None);
        assert_eq!(gate.get_untracked().display_identity(), "b@c.com");
    });
}

#[test]
fn driver_redirects_when_signed_out_elsewhere_in_app() {
    Owner::new().with(|| {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store.write(&SessionMarker::new("tok", "a@b.com")).unwrap();
        let gate = RwSignal::new(GateState::Unknown);
        let (mut driver, visits) = driver_over(&backend, gate);
        driver.sync(&gate.get_untracked());

        // Same steps as end_session, against the injected store.
        sign_out(&store, |_| gate.set(GateState::Denied));
        driver.sync(&gate.get_untracked());
        assert_eq!(gate.get_untracked(), GateState::Denied);
        assert_eq!(*visits.borrow(), vec![(LOGIN_PATH.to_owned(), true)]);
    });
}

#[test]
fn remount_hides_cached_authorization_until_storage_is_read() {
    Owner::new().with(|| {
        let backend = MemoryStore::new();
        let gate = RwSignal::new(GateState::Authorized(SessionMarker::new("stale", "a@b.com")));
        reset_for_mount(gate);
        assert_eq!(gate.get_untracked(), GateState::Unknown);

        // Storage no longer holds the marker, so the mount run denies.
        let (mut driver, visits) = driver_over(&backend, gate);
        driver.sync(&gate.get_untracked());
        assert_eq!(gate.get_untracked(), GateState::Denied);
        assert_eq!(visits.borrow().len(), 1);
    });
}
