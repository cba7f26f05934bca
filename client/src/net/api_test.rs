use super::*;

#[test]
fn conference_endpoint_formats_expected_path() {
    assert_eq!(conference_endpoint("c-42"), "/api/conferences/c-42");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn login_failed_message_maps_known_statuses() {
    assert_eq!(login_failed_message(401), "Invalid admin value");
    assert_eq!(login_failed_message(429), "Too many attempts. Try again later.");
    assert_eq!(login_failed_message(500), "login failed: 500");
}

#[test]
fn mutation_401_is_unauthorized() {
    assert_eq!(mutation_error_for_status("create conference", 401), MutationError::Unauthorized);
}

#[test]
fn mutation_other_status_is_failed_with_message() {
    let err = mutation_error_for_status("delete conference", 404);
    assert_eq!(err, MutationError::Failed("delete conference failed: 404".to_owned()));
    assert_eq!(err.to_string(), "delete conference failed: 404");
}
