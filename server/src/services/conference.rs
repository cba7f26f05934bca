//! Conference listings: model, validation, stats, and storage backends.
//!
//! ARCHITECTURE
//! ============
//! Routes talk to `Arc<dyn ConferenceStore>`. `PgConferenceStore` persists to
//! the `conferences` table; `MemoryConferenceStore` backs tests and servers
//! started without `DATABASE_URL`.

#[cfg(test)]
#[path = "conference_test.rs"]
mod tests;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use time::{Date, Month, OffsetDateTime};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Message returned when a required field is blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Image used when a conference is saved without one.
pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1531545514256-b1400bc00f31?q=80&w=1200&auto=format&fit=crop";

// =============================================================================
// MODEL
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConferenceStatus {
    #[default]
    #[serde(rename = "Registration Open")]
    RegistrationOpen,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
    #[serde(rename = "Closed")]
    Closed,
}

impl ConferenceStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegistrationOpen => "Registration Open",
            Self::ComingSoon => "Coming Soon",
            Self::Closed => "Closed",
        }
    }

    /// Parse a stored label. Unknown labels read as `Closed`.
    #[must_use]
    pub fn from_db(raw: &str) -> Self {
        match raw {
            "Registration Open" => Self::RegistrationOpen,
            "Coming Soon" => Self::ComingSoon,
            _ => Self::Closed,
        }
    }
}

/// A stored conference listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub date: String,
    pub delegates: String,
    pub status: ConferenceStatus,
    pub description: String,
    pub image_url: String,
    pub website: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Body of `POST /api/conferences`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewConference {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub delegates: String,
    #[serde(default)]
    pub status: ConferenceStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// Aggregates shown on the public and admin dashboards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConferenceStats {
    pub total: usize,
    pub open_registrations: usize,
    pub total_delegates: u64,
    pub venues: usize,
    pub upcoming: usize,
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConferenceError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("conference not found")]
    NotFound,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

// =============================================================================
// VALIDATION + STATS
// =============================================================================

/// Trim every field, default the image, and require name, location, and date.
///
/// # Errors
///
/// Returns [`ConferenceError::Invalid`] when a required field is blank.
pub fn normalize(input: NewConference) -> Result<NewConference, ConferenceError> {
    let image_url = input.image_url.trim();
    let normalized = NewConference {
        name: input.name.trim().to_owned(),
        location: input.location.trim().to_owned(),
        date: input.date.trim().to_owned(),
        delegates: input.delegates.trim().to_owned(),
        status: input.status,
        description: input.description.trim().to_owned(),
        image_url: if image_url.is_empty() { DEFAULT_IMAGE_URL.to_owned() } else { image_url.to_owned() },
        website: input
            .website
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_owned),
    };
    if normalized.name.is_empty() || normalized.location.is_empty() || normalized.date.is_empty() {
        return Err(ConferenceError::Invalid(REQUIRED_FIELDS_MESSAGE));
    }
    Ok(normalized)
}

/// Leading integer of a free-text delegate count: `"500+"` is 500, `"TBD"` is 0.
#[must_use]
pub fn delegate_count(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0)
}

fn parse_month(raw: &str) -> Option<Month> {
    const MONTHS: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];
    let lower = raw.trim_end_matches('.').to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTHS
        .into_iter()
        .find(|m| m.to_string().to_ascii_lowercase().starts_with(&lower))
}

fn parse_iso_date(raw: &str) -> Option<Date> {
    let mut parts = raw.split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u8>().ok()?;
    let day = parts.next()?.parse::<u8>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

/// Start date of a free-text date such as `"March 1-3, 2024"` or `"2024-03-01"`.
#[must_use]
pub fn parse_start_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Some(date) = parse_iso_date(raw) {
        return Some(date);
    }
    let (head, tail) = raw.split_once(',')?;
    let year = tail.split_whitespace().next()?.parse::<i32>().ok()?;
    let mut words = head.split_whitespace();
    let month = parse_month(words.next()?)?;
    let day = words.next()?.split('-').next()?.parse::<u8>().ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Stats over `items` with `today` as the cut-off for upcoming conferences.
/// The delegate total saturates at `u64::MAX`.
#[must_use]
pub fn compute_stats(items: &[Conference], today: Date) -> ConferenceStats {
    let venues: HashSet<&str> = items.iter().map(|c| c.location.as_str()).collect();
    ConferenceStats {
        total: items.len(),
        open_registrations: items
            .iter()
            .filter(|c| c.status == ConferenceStatus::RegistrationOpen)
            .count(),
        total_delegates: items
            .iter()
            .map(|c| delegate_count(&c.delegates))
            .fold(0, u64::saturating_add),
        venues: venues.len(),
        upcoming: items
            .iter()
            .filter(|c| parse_start_date(&c.date).is_some_and(|d| d >= today))
            .count(),
    }
}

// =============================================================================
// STORE TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait ConferenceStore: Send + Sync {
    /// Every conference, ordered by name.
    async fn list(&self) -> Result<Vec<Conference>, ConferenceError>;

    /// One conference by id.
    async fn get(&self, id: Uuid) -> Result<Conference, ConferenceError>;

    /// Insert an already-normalized conference.
    async fn create(&self, input: NewConference) -> Result<Conference, ConferenceError>;

    /// Delete by id.
    async fn delete(&self, id: Uuid) -> Result<(), ConferenceError>;
}

fn build(input: NewConference) -> Conference {
    Conference {
        id: Uuid::new_v4(),
        name: input.name,
        location: input.location,
        date: input.date,
        delegates: input.delegates,
        status: input.status,
        description: input.description,
        image_url: input.image_url,
        website: input.website,
        created_at: OffsetDateTime::now_utc(),
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

#[derive(Default)]
pub struct MemoryConferenceStore {
    items: RwLock<Vec<Conference>>,
}

impl MemoryConferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ConferenceStore for MemoryConferenceStore {
    async fn list(&self) -> Result<Vec<Conference>, ConferenceError> {
        let mut items = self.items.read().await.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn get(&self, id: Uuid) -> Result<Conference, ConferenceError> {
        self.items
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ConferenceError::NotFound)
    }

    async fn create(&self, input: NewConference) -> Result<Conference, ConferenceError> {
        let conference = build(input);
        self.items.write().await.push(conference.clone());
        Ok(conference)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ConferenceError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|c| c.id != id);
        if items.len() == before {
            return Err(ConferenceError::NotFound);
        }
        Ok(())
    }
}

// =============================================================================
// POSTGRES STORE
// =============================================================================

pub struct PgConferenceStore {
    pool: PgPool,
}

impl PgConferenceStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str =
    "id, name, location, date, delegates, status, description, image_url, website, created_at";

fn row_to_conference(row: &sqlx::postgres::PgRow) -> Conference {
    let status: String = row.get("status");
    Conference {
        id: row.get("id"),
        name: row.get("name"),
        location: row.get("location"),
        date: row.get("date"),
        delegates: row.get("delegates"),
        status: ConferenceStatus::from_db(&status),
        description: row.get("description"),
        image_url: row.get("image_url"),
        website: row.get("website"),
        created_at: row.get("created_at"),
    }
}

#[async_trait::async_trait]
impl ConferenceStore for PgConferenceStore {
    async fn list(&self) -> Result<Vec<Conference>, ConferenceError> {
        let rows = sqlx::query(&format!("SELECT {SELECT_COLUMNS} FROM conferences ORDER BY name"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(row_to_conference).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Conference, ConferenceError> {
        let row = sqlx::query(&format!("SELECT {SELECT_COLUMNS} FROM conferences WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ConferenceError::NotFound)?;
        Ok(row_to_conference(&row))
    }

    async fn create(&self, input: NewConference) -> Result<Conference, ConferenceError> {
        let conference = build(input);
        sqlx::query(
            r"INSERT INTO conferences
                  (id, name, location, date, delegates, status, description, image_url, website, created_at)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(conference.id)
        .bind(&conference.name)
        .bind(&conference.location)
        .bind(&conference.date)
        .bind(&conference.delegates)
        .bind(conference.status.as_str())
        .bind(&conference.description)
        .bind(&conference.image_url)
        .bind(&conference.website)
        .bind(conference.created_at)
        .execute(&self.pool)
        .await?;
        Ok(conference)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ConferenceError> {
        let result = sqlx::query("DELETE FROM conferences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ConferenceError::NotFound);
        }
        Ok(())
    }
}
