use super::*;

#[test]
fn env_parse_falls_back_when_unset() {
    assert_eq!(env_parse::<u16>("CONFIG_TEST_SURELY_UNSET_PORT", 4321), 4321);
}

#[test]
fn env_non_empty_is_none_when_unset() {
    assert_eq!(env_non_empty("CONFIG_TEST_SURELY_UNSET_URL"), None);
}

#[test]
fn default_config_matches_documented_defaults() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.database_url, None);
    assert_eq!(cfg.db_max_connections, 5);
    assert_eq!(cfg.session_ttl, Duration::from_secs(43_200));
    assert_eq!(cfg.login_rate_limit, 5);
    assert_eq!(cfg.login_rate_window, Duration::from_secs(60));
    assert!(!cfg.trust_forwarded_for);
}

#[test]
fn env_bool_falls_back_when_unset() {
    assert!(!env_bool("CONFIG_TEST_SURELY_UNSET_FLAG", false));
    assert!(env_bool("CONFIG_TEST_SURELY_UNSET_FLAG", true));
}
