//! Admin dashboard: aggregates, the full conference table, quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route after login. Content only renders
//! once `AdminLayout` has authorized the session.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::stats_grid::{StatsAudience, StatsGrid};
use crate::components::status_badge::StatusBadge;
use crate::state::conferences::ConferencesState;
use crate::state::session::GateState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let listing = expect_context::<RwSignal<ConferencesState>>();
    let gate = expect_context::<RwSignal<GateState>>();

    Effect::new(move || super::load_listing(listing));

    let stats = Signal::derive(move || listing.get().stats);

    view! {
        <AdminLayout>
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Dashboard"</h1>
                    <p>"Welcome back, " {move || gate.get().display_identity()}</p>
                </header>
                <Show
                    when=move || !listing.get().loading
                    fallback=move || view! { <p>"Loading dashboard..."</p> }
                >
                    <StatsGrid stats=stats audience=StatsAudience::Admin/>
                    <section class="dashboard-page__recent">
                        <h2>"Conferences"</h2>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Conference Name"</th>
                                    <th>"Date"</th>
                                    <th>"Status"</th>
                                    <th>"Delegates"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show
                                    when=move || !listing.get().items.is_empty()
                                    fallback=move || view! { <tr><td colspan="4">"No conferences found"</td></tr> }
                                >
                                    <For
                                        each=move || listing.get().items
                                        key=|c| c.id.clone()
                                        children=move |c| {
                                            let delegates = if c.delegates.is_empty() { "0".to_owned() } else { c.delegates.clone() };
                                            view! {
                                                <tr>
                                                    <td>{c.name.clone()}</td>
                                                    <td>{c.display_date().to_owned()}</td>
                                                    <td><StatusBadge status=c.status/></td>
                                                    <td>{delegates}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </Show>
                            </tbody>
                        </table>
                    </section>
                    <section class="dashboard-page__actions">
                        <h2>"Quick Actions"</h2>
                        <a class="btn" href="/admin/conferences/new">"Add New Conference"</a>
                        <a class="btn" href="/admin/conferences">"Manage Conferences"</a>
                    </section>
                </Show>
            </div>
        </AdminLayout>
    }
}
