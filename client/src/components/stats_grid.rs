//! Summary cards for conference aggregates.
//!
//! DESIGN
//! ======
//! Shared by the public listing and the admin dashboard; the caller picks
//! which aggregates to label since the two pages emphasize different counts.

use leptos::prelude::*;

use crate::net::types::ConferenceStats;

/// Which card set to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsAudience {
    Public,
    Admin,
}

/// `(label, value)` pairs for the given audience.
pub fn stat_cards(stats: &ConferenceStats, audience: StatsAudience) -> Vec<(&'static str, String)> {
    match audience {
        StatsAudience::Public => vec![
            ("Conferences", stats.total.to_string()),
            ("Open Registrations", stats.open_registrations.to_string()),
            ("Delegates", stats.total_delegates.to_string()),
            ("Venues", stats.venues.to_string()),
        ],
        StatsAudience::Admin => vec![
            ("Total Conferences", stats.total.to_string()),
            ("Active Conferences", stats.open_registrations.to_string()),
            ("Total Delegates", stats.total_delegates.to_string()),
            ("Upcoming Conferences", stats.upcoming.to_string()),
        ],
    }
}

#[component]
pub fn StatsGrid(stats: Signal<ConferenceStats>, audience: StatsAudience) -> impl IntoView {
    view! {
        <div class="stats-grid">
            {move || {
                stat_cards(&stats.get(), audience)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stats-grid__card">
                                <span class="stats-grid__value">{value}</span>
                                <span class="stats-grid__label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> ConferenceStats {
        ConferenceStats { total: 4, open_registrations: 2, total_delegates: 900, venues: 3, upcoming: 1 }
    }

    #[test]
    fn public_cards_show_venues() {
        let cards = stat_cards(&stats(), StatsAudience::Public);
        assert_eq!(cards[3], ("Venues", "3".to_owned()));
        assert_eq!(cards.len(), 4);
    }

    #[test]
    fn admin_cards_show_upcoming() {
        let cards = stat_cards(&stats(), StatsAudience::Admin);
        assert_eq!(cards[1], ("Active Conferences", "2".to_owned()));
        assert_eq!(cards[3], ("Upcoming Conferences", "1".to_owned()));
    }
}
