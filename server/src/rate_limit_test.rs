use super::*;

const LIMIT: usize = 5;
const WINDOW: Duration = Duration::from_secs(60);

#[test]
fn allows_up_to_limit() {
    let rl = LoginRateLimiter::new(LIMIT, WINDOW);
    let now = Instant::now();

    for i in 0..LIMIT {
        assert!(rl.check_and_record_at("1.2.3.4", now).is_ok(), "attempt {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("1.2.3.4", now),
        Err(RateLimitError::TooManyAttempts { limit: LIMIT, window_secs: 60 })
    ));
}

#[test]
fn clients_are_independent() {
    let rl = LoginRateLimiter::new(LIMIT, WINDOW);
    let now = Instant::now();

    for _ in 0..LIMIT {
        rl.check_and_record_at("1.2.3.4", now).unwrap();
    }
    assert!(rl.check_and_record_at("1.2.3.4", now).is_err());
    assert!(rl.check_and_record_at("5.6.7.8", now).is_ok());
}

#[test]
fn window_expiry_allows_new_attempts() {
    let rl = LoginRateLimiter::new(LIMIT, WINDOW);
    let start = Instant::now();

    for _ in 0..LIMIT {
        rl.check_and_record_at("1.2.3.4", start).unwrap();
    }
    assert!(rl.check_and_record_at("1.2.3.4", start).is_err());

    let later = start + WINDOW;
    assert!(rl.check_and_record_at("1.2.3.4", later).is_ok());
}

#[test]
fn rejected_attempts_are_not_recorded() {
    let rl = LoginRateLimiter::new(1, WINDOW);
    let start = Instant::now();

    rl.check_and_record_at("c", start).unwrap();
    for offset in 1..10 {
        assert!(rl.check_and_record_at("c", start + Duration::from_secs(offset)).is_err());
    }
    assert!(rl.check_and_record_at("c", start + WINDOW).is_ok());
}

#[test]
fn zero_limit_rejects_everything() {
    let rl = LoginRateLimiter::new(0, WINDOW);
    assert!(rl.check_and_record("c").is_err());
}

#[test]
fn error_message_names_limit() {
    let err = RateLimitError::TooManyAttempts { limit: 5, window_secs: 60 };
    assert_eq!(err.to_string(), "login rate limit exceeded (max 5 attempts/60s)");
}
