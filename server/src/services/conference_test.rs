use super::*;
use time::macros::date;

fn draft(name: &str) -> NewConference {
    NewConference {
        name: name.into(),
        location: "Singapore".into(),
        date: "March 1-3, 2030".into(),
        delegates: "500+".into(),
        ..NewConference::default()
    }
}

fn conference(name: &str, location: &str, date: &str, delegates: &str, status: ConferenceStatus) -> Conference {
    Conference {
        id: Uuid::new_v4(),
        name: name.into(),
        location: location.into(),
        date: date.into(),
        delegates: delegates.into(),
        status,
        description: String::new(),
        image_url: DEFAULT_IMAGE_URL.into(),
        website: None,
        created_at: OffsetDateTime::now_utc(),
    }
}

// =============================================================================
// normalize
// =============================================================================

#[test]
fn normalize_trims_and_defaults() {
    let input = NewConference {
        name: "  SMUN  ".into(),
        location: " Singapore ".into(),
        date: " March 1-3, 2030 ".into(),
        website: Some("   ".into()),
        ..NewConference::default()
    };
    let out = normalize(input).unwrap();
    assert_eq!(out.name, "SMUN");
    assert_eq!(out.location, "Singapore");
    assert_eq!(out.date, "March 1-3, 2030");
    assert_eq!(out.image_url, DEFAULT_IMAGE_URL);
    assert_eq!(out.website, None);
    assert_eq!(out.status, ConferenceStatus::RegistrationOpen);
}

#[test]
fn normalize_rejects_blank_required_fields() {
    for blank in ["name", "location", "date"] {
        let mut input = draft("SMUN");
        match blank {
            "name" => input.name = "  ".into(),
            "location" => input.location = String::new(),
            _ => input.date = "\t".into(),
        }
        let err = normalize(input).unwrap_err();
        assert!(matches!(err, ConferenceError::Invalid(REQUIRED_FIELDS_MESSAGE)), "{blank}");
    }
}

#[test]
fn status_labels_round_trip_through_db_text() {
    for status in [ConferenceStatus::RegistrationOpen, ConferenceStatus::ComingSoon, ConferenceStatus::Closed] {
        assert_eq!(ConferenceStatus::from_db(status.as_str()), status);
    }
}

#[test]
fn status_serializes_as_label() {
    let json = serde_json::to_string(&ConferenceStatus::ComingSoon).unwrap();
    assert_eq!(json, "\"Coming Soon\"");
}

// =============================================================================
// stats helpers
// =============================================================================

#[test]
fn delegate_count_reads_leading_integer() {
    assert_eq!(delegate_count("500+"), 500);
    assert_eq!(delegate_count(" 120 delegates"), 120);
    assert_eq!(delegate_count("1,000"), 1);
    assert_eq!(delegate_count("TBD"), 0);
    assert_eq!(delegate_count(""), 0);
}

#[test]
fn parse_start_date_accepts_ranges_and_iso() {
    assert_eq!(parse_start_date("March 1-3, 2024"), Some(date!(2024 - 03 - 01)));
    assert_eq!(parse_start_date("Mar 15, 2025"), Some(date!(2025 - 03 - 15)));
    assert_eq!(parse_start_date("march 30 - April 2, 2026"), Some(date!(2026 - 03 - 30)));
    assert_eq!(parse_start_date("2027-11-05"), Some(date!(2027 - 11 - 05)));
}

#[test]
fn parse_start_date_rejects_garbage() {
    assert_eq!(parse_start_date("TBA"), None);
    assert_eq!(parse_start_date("Smarch 1, 2024"), None);
    assert_eq!(parse_start_date("February 30, 2024"), None);
    assert_eq!(parse_start_date("March 1"), None);
    assert_eq!(parse_start_date(""), None);
}

#[test]
fn compute_stats_aggregates_listing() {
    let today = date!(2025 - 06 - 01);
    let items = vec![
        conference("A", "Singapore", "March 1-3, 2025", "500+", ConferenceStatus::Closed),
        conference("B", "Singapore", "June 1-2, 2025", "200", ConferenceStatus::RegistrationOpen),
        conference("C", "Jakarta", "2026-01-10", "TBD", ConferenceStatus::ComingSoon),
        conference("D", "Kuala Lumpur", "TBA", "50", ConferenceStatus::RegistrationOpen),
    ];
    let stats = compute_stats(&items, today);
    assert_eq!(
        stats,
        ConferenceStats { total: 4, open_registrations: 2, total_delegates: 750, venues: 3, upcoming: 2 }
    );
}

#[test]
fn compute_stats_of_empty_listing_is_zero() {
    assert_eq!(compute_stats(&[], date!(2025 - 01 - 01)), ConferenceStats::default());
}

// =============================================================================
// MemoryConferenceStore
// =============================================================================

#[tokio::test]
async fn memory_store_lists_by_name() {
    let store = MemoryConferenceStore::new();
    store.create(draft("Zeta")).await.unwrap();
    store.create(draft("Alpha")).await.unwrap();
    let names: Vec<String> = store.list().await.unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Alpha".to_owned(), "Zeta".to_owned()]);
}

#[tokio::test]
async fn memory_store_get_and_delete() {
    let store = MemoryConferenceStore::new();
    let created = store.create(draft("SMUN")).await.unwrap();
    assert_eq!(store.get(created.id).await.unwrap(), created);

    store.delete(created.id).await.unwrap();
    assert!(matches!(store.get(created.id).await, Err(ConferenceError::NotFound)));
    assert!(matches!(store.delete(created.id).await, Err(ConferenceError::NotFound)));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
async fn pg_store_create_list_delete() {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db-tests");
    let pool = crate::db::init_pool(&url, 2).await.expect("db init");
    let store = PgConferenceStore::new(pool);
    let created = store.create(draft("Live DB Test")).await.unwrap();
    assert!(store.list().await.unwrap().iter().any(|c| c.id == created.id));
    assert_eq!(store.get(created.id).await.unwrap().name, "Live DB Test");
    store.delete(created.id).await.unwrap();
}

#[test]
fn compute_stats_delegate_total_saturates() {
    let items = vec![
        conference("A", "Singapore", "TBA", "18446744073709551615", ConferenceStatus::Closed),
        conference("B", "Jakarta", "TBA", "1", ConferenceStatus::Closed),
    ];
    assert_eq!(compute_stats(&items, date!(2025 - 01 - 01)).total_delegates, u64::MAX);
}
