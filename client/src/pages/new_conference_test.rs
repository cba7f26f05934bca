use super::*;

#[test]
fn apply_field_sets_text_fields() {
    let mut draft = NewConference::default();
    apply_field(&mut draft, "name", "SMUN".to_owned());
    apply_field(&mut draft, "location", "Singapore".to_owned());
    apply_field(&mut draft, "date", "March 1-3, 2030".to_owned());
    apply_field(&mut draft, "delegates", "500+".to_owned());
    assert_eq!(draft.name, "SMUN");
    assert_eq!(draft.location, "Singapore");
    assert_eq!(draft.date, "March 1-3, 2030");
    assert_eq!(draft.delegates, "500+");
}

#[test]
fn apply_field_parses_status_label() {
    let mut draft = NewConference::default();
    apply_field(&mut draft, "status", "Coming Soon".to_owned());
    assert_eq!(draft.status, ConferenceStatus::ComingSoon);
    apply_field(&mut draft, "status", "garbage".to_owned());
    assert_eq!(draft.status, ConferenceStatus::RegistrationOpen);
}

#[test]
fn apply_field_ignores_unknown_field() {
    let mut draft = NewConference::default();
    apply_field(&mut draft, "id", "x".to_owned());
    assert_eq!(draft, NewConference::default());
}

#[test]
fn abandon_submit_releases_button_and_denies_gate() {
    Owner::new().with(|| {
        let submitting = RwSignal::new(true);
        let gate = RwSignal::new(GateState::Authorized(crate::util::session_store::SessionMarker::new("t", "a@b.com")));
        abandon_submit(submitting, gate);
        assert!(!submitting.get_untracked());
        assert_eq!(gate.get_untracked(), GateState::Denied);
    });
}
