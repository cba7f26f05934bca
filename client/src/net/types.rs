//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's `/api/login` and `/api/conferences`
//! payloads so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Image used when a conference is saved without one.
pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1531545514256-b1400bc00f31?q=80&w=1200&auto=format&fit=crop";

/// Publication status of a conference listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
    pub const ALL: [Self; 3] = [Self::RegistrationOpen, Self::ComingSoon, Self::Closed];

    /// Display label, identical to the wire value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RegistrationOpen => "Registration Open",
            Self::ComingSoon => "Coming Soon",
            Self::Closed => "Closed",
        }
    }

    /// Parse a wire/display label.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == raw)
    }

    /// BEM modifier for status badges.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::RegistrationOpen => "open",
            Self::ComingSoon => "soon",
            Self::Closed => "closed",
        }
    }
}

/// A conference listing as returned by `/api/conferences`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    /// Unique identifier (UUID string).
    pub id: String,
    pub name: String,
    pub location: String,
    /// Free-text date, e.g. `"March 1-3, 2024"`.
    pub date: String,
    /// Free-text expected delegates, e.g. `"500+"`.
    #[serde(default)]
    pub delegates: String,
    pub status: ConferenceStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub website: Option<String>,
}

impl Conference {
    /// Date text for display; blank dates render as `"TBA"`.
    #[must_use]
    pub fn display_date(&self) -> &str {
        let trimmed = self.date.trim();
        if trimmed.is_empty() { "TBA" } else { trimmed }
    }
}

/// Body of `POST /api/conferences`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewConference {
    pub name: String,
    pub location: String,
    pub date: String,
    pub delegates: String,
    pub status: ConferenceStatus,
    pub description: String,
    pub image_url: String,
    pub website: Option<String>,
}

impl Default for NewConference {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            date: String::new(),
            delegates: String::new(),
            status: ConferenceStatus::RegistrationOpen,
            description: String::new(),
            image_url: DEFAULT_IMAGE_URL.to_owned(),
            website: None,
        }
    }
}

/// Aggregates served by `/api/conferences/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceStats {
    pub total: usize,
    pub open_registrations: usize,
    pub total_delegates: u64,
    pub venues: usize,
    pub upcoming: usize,
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
