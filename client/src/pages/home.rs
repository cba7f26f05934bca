//! Public conference listing with a status filter.

use leptos::prelude::*;

use crate::components::conference_card::ConferenceCard;
use crate::components::stats_grid::{StatsAudience, StatsGrid};
use crate::net::types::ConferenceStatus;
use crate::state::conferences::{ConferencesState, StatusFilter, filter_conferences};
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn HomePage() -> impl IntoView {
    let listing = expect_context::<RwSignal<ConferencesState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let filter = RwSignal::new(StatusFilter::All);

    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        super::load_listing(listing);
    });

    let visible = Memo::new(move |_| filter_conferences(&listing.get().items, filter.get()));
    let stats = Signal::derive(move || listing.get().stats);

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Singapore MUN Conferences"</h1>
                <button
                    class="btn home-page__theme"
                    on:click=move |_| {
                        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </header>

            <StatsGrid stats=stats audience=StatsAudience::Public/>

            <div class="filters">
                <label class="filters__label" for="status-filter">"Filter by status"</label>
                <select
                    id="status-filter"
                    class="filters__select"
                    prop:value=move || filter.get().value()
                    on:change=move |ev| filter.set(StatusFilter::from_value(&event_target_value(&ev)))
                >
                    <option value="all">"All Conferences"</option>
                    {ConferenceStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || listing.get().error.is_some()>
                <p class="home-page__error">{move || listing.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !listing.get().loading
                fallback=move || view! { <p class="home-page__loading">"Loading conferences..."</p> }
            >
                <Show
                    when=move || !visible.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="home-page__empty">
                                <p>{move || filter.get().empty_message()}</p>
                                <Show when=move || filter.get() != StatusFilter::All>
                                    <button class="btn" on:click=move |_| filter.set(StatusFilter::All)>
                                        "View all conferences"
                                    </button>
                                </Show>
                            </div>
                        }
                    }
                >
                    <div class="conference-grid">
                        <For
                            each=move || visible.get()
                            key=|c| c.id.clone()
                            children=move |conference| view! { <ConferenceCard conference=conference/> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
