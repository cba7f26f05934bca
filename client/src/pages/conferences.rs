//! Admin conference management table with delete.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::status_badge::StatusBadge;
use crate::state::conferences::ConferencesState;
use crate::state::session::GateState;

#[cfg(feature = "hydrate")]
fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message("Are you sure you want to delete this conference?").ok())
        .unwrap_or(false)
}

/// Delete `id` with the current session token, dropping it from `listing`
/// on success. A rejected token ends the session.
fn request_delete(gate: RwSignal<GateState>, listing: RwSignal<ConferencesState>, id: String) {
    #[cfg(feature = "hydrate")]
    {
        if !confirm_delete() {
            return;
        }
        let Some(token) = gate.get_untracked().token().map(str::to_owned) else {
            crate::util::session_gate::end_session(gate);
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_conference(&token, &id).await {
                Ok(()) => listing.update(|s| s.remove(&id)),
                Err(crate::net::api::MutationError::Unauthorized) => {
                    log::warn!("session token rejected; signing out");
                    crate::util::session_gate::end_session(gate);
                }
                Err(e) => {
                    log::error!("delete conference failed: {e}");
                    listing.update(|s| s.error = Some(e.to_string()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gate, listing, id);
    }
}

#[component]
pub fn ConferencesPage() -> impl IntoView {
    let listing = expect_context::<RwSignal<ConferencesState>>();
    let gate = expect_context::<RwSignal<GateState>>();

    Effect::new(move || super::load_listing(listing));

    view! {
        <AdminLayout>
            <div class="conferences-page">
                <header class="conferences-page__header">
                    <h1>"Manage Conferences"</h1>
                    <a class="btn" href="/admin/conferences/new">"Add New"</a>
                </header>
                <Show when=move || listing.get().error.is_some()>
                    <p class="conferences-page__error">{move || listing.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !listing.get().loading
                    fallback=move || view! { <p>"Loading conferences..."</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Location"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th>"Delegates"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || !listing.get().items.is_empty()
                                fallback=move || {
                                    view! {
                                        <tr>
                                            <td colspan="6">"No conferences found. Add your first conference!"</td>
                                        </tr>
                                    }
                                }
                            >
                                <For
                                    each=move || listing.get().items
                                    key=|c| c.id.clone()
                                    children=move |c| {
                                        let id = c.id.clone();
                                        view! {
                                            <tr>
                                                <td>{c.name.clone()}</td>
                                                <td>{c.location.clone()}</td>
                                                <td>{c.display_date().to_owned()}</td>
                                                <td><StatusBadge status=c.status/></td>
                                                <td>{c.delegates.clone()}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger"
                                                        title="Delete conference"
                                                        on:click=move |_| request_delete(gate, listing, id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </Show>
                        </tbody>
                    </table>
                </Show>
            </div>
        </AdminLayout>
    }
}
