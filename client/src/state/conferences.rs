//! Conference listing state shared by the public and admin pages.
//!
//! DESIGN
//! ======
//! Plain data plus pure helpers (filtering, draft validation) so page
//! components stay thin and the logic is testable off-browser.

#[cfg(test)]
#[path = "conferences_test.rs"]
mod conferences_test;

use crate::net::types::{Conference, ConferenceStats, ConferenceStatus, NewConference};

/// Message shown when a required conference field is blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Status filter on the public listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ConferenceStatus),
}

impl StatusFilter {
    /// `<select>` option value.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.label(),
        }
    }

    /// Parse a `<select>` option value; unknown values mean `All`.
    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        ConferenceStatus::from_label(raw).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn matches(self, conference: &Conference) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => conference.status == status,
        }
    }

    /// Empty-state copy for this filter.
    #[must_use]
    pub fn empty_message(self) -> String {
        match self {
            Self::All => "There are no conferences listed at the moment.".to_owned(),
            Self::Only(status) => {
                format!("There are no conferences with status \"{}\" at the moment.", status.label())
            }
        }
    }
}

/// Conferences matching `filter`, preserving order.
#[must_use]
pub fn filter_conferences(items: &[Conference], filter: StatusFilter) -> Vec<Conference> {
    items.iter().filter(|c| filter.matches(c)).cloned().collect()
}

/// Trim a draft and check the required fields.
///
/// # Errors
///
/// Returns [`REQUIRED_FIELDS_MESSAGE`] if name, location, or date is blank.
pub fn validate_draft(draft: &NewConference) -> Result<NewConference, &'static str> {
    let cleaned = NewConference {
        name: draft.name.trim().to_owned(),
        location: draft.location.trim().to_owned(),
        date: draft.date.trim().to_owned(),
        delegates: draft.delegates.trim().to_owned(),
        status: draft.status,
        description: draft.description.trim().to_owned(),
        image_url: draft.image_url.trim().to_owned(),
        website: draft
            .website
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_owned),
    };
    if cleaned.name.is_empty() || cleaned.location.is_empty() || cleaned.date.is_empty() {
        return Err(REQUIRED_FIELDS_MESSAGE);
    }
    Ok(cleaned)
}

/// Listing data loaded from the API.
#[derive(Clone, Debug, Default)]
pub struct ConferencesState {
    pub items: Vec<Conference>,
    pub stats: ConferenceStats,
    pub loading: bool,
    pub error: Option<String>,
}

impl ConferencesState {
    /// Drop a deleted conference from the local list.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|c| c.id != id);
    }
}
