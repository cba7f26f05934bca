//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Admin pages render inside `AdminLayout`, which gates them.

pub mod conferences;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod new_conference;

use leptos::prelude::*;

use crate::state::conferences::ConferencesState;

/// Fetch the conference list and stats into `listing`. No-op during SSR.
pub(crate) fn load_listing(listing: RwSignal<ConferencesState>) {
    listing.update(|s| {
        s.loading = true;
        s.error = None;
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = crate::net::api::fetch_conferences().await;
        let stats = crate::net::api::fetch_conference_stats().await;
        listing.update(|s| {
            s.loading = false;
            match items {
                Ok(items) => s.items = items,
                Err(e) => {
                    log::error!("conference list failed: {e}");
                    s.error = Some(e);
                }
            }
            match stats {
                Ok(stats) => s.stats = stats,
                Err(e) => log::warn!("conference stats failed: {e}"),
            }
        });
    });
}
