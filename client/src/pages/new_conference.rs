//! Admin form for adding a conference.

#[cfg(test)]
#[path = "new_conference_test.rs"]
mod new_conference_test;

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::{ConferenceStatus, NewConference};
use crate::state::conferences::validate_draft;
use crate::state::session::GateState;

/// Route the admin lands on after a successful create.
const AFTER_CREATE_PATH: &str = "/admin/conferences";

/// Apply one form field edit to the draft. Unknown fields are ignored.
fn apply_field(draft: &mut NewConference, field: &str, value: String) {
    match field {
        "name" => draft.name = value,
        "location" => draft.location = value,
        "date" => draft.date = value,
        "delegates" => draft.delegates = value,
        "status" => draft.status = ConferenceStatus::from_label(&value).unwrap_or_default(),
        "description" => draft.description = value,
        "image_url" => draft.image_url = value,
        "website" => draft.website = Some(value),
        _ => {}
    }
}

/// Release the submit button and end the session after the token is
/// missing or rejected.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn abandon_submit(submitting: RwSignal<bool>, gate: RwSignal<GateState>) {
    submitting.set(false);
    crate::util::session_gate::end_session(gate);
}

#[component]
fn TextField(
    draft: RwSignal<NewConference>,
    field: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let current = move || {
        let d = draft.get();
        match field {
            "name" => d.name,
            "location" => d.location,
            "date" => d.date,
            "delegates" => d.delegates,
            "image_url" => d.image_url,
            "website" => d.website.unwrap_or_default(),
            _ => String::new(),
        }
    };
    view! {
        <div class="form-field">
            <label for=field>{label}{required.then_some(" *")}</label>
            <input
                id=field
                name=field
                type="text"
                placeholder=placeholder
                required=required
                prop:value=current
                on:input=move |ev| draft.update(|d| apply_field(d, field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn NewConferencePage() -> impl IntoView {
    let gate = expect_context::<RwSignal<GateState>>();
    let draft = RwSignal::new(NewConference::default());
    let error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let cleaned = match validate_draft(&draft.get()) {
            Ok(cleaned) => cleaned,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        submitting.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = gate.get_untracked().token().map(str::to_owned) else {
                abandon_submit(submitting, gate);
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_conference(&token, &cleaned).await {
                    Ok(created) => {
                        log::info!("conference {} created", created.id);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(AFTER_CREATE_PATH);
                        }
                    }
                    Err(crate::net::api::MutationError::Unauthorized) => {
                        log::warn!("session token rejected; signing out");
                        abandon_submit(submitting, gate);
                    }
                    Err(e) => {
                        log::error!("create conference failed: {e}");
                        error.set("Failed to add conference. Please try again.".to_owned());
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (gate, cleaned);
    };

    view! {
        <AdminLayout>
            <div class="new-conference-page">
                <header>
                    <h1>"Add New Conference"</h1>
                    <p>"Create a new conference listing"</p>
                </header>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>
                <form class="conference-form" on:submit=on_submit>
                    <TextField draft=draft field="name" label="Conference Name" required=true/>
                    <TextField draft=draft field="location" label="Location" required=true/>
                    <TextField draft=draft field="date" label="Date" placeholder="e.g., March 1-3, 2024" required=true/>
                    <TextField draft=draft field="delegates" label="Expected Delegates" placeholder="e.g., 500+"/>
                    <div class="form-field">
                        <label for="status">"Status"</label>
                        <select
                            id="status"
                            prop:value=move || draft.get().status.label()
                            on:change=move |ev| draft.update(|d| apply_field(d, "status", event_target_value(&ev)))
                        >
                            {ConferenceStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <TextField draft=draft field="image_url" label="Image URL"/>
                    <TextField draft=draft field="website" label="Website"/>
                    <div class="form-field">
                        <label for="description">"Description"</label>
                        <textarea
                            id="description"
                            rows="4"
                            prop:value=move || draft.get().description
                            on:input=move |ev| draft.update(|d| apply_field(d, "description", event_target_value(&ev)))
                        ></textarea>
                    </div>
                    <div class="conference-form__actions">
                        <a class="btn" href=AFTER_CREATE_PATH>"Cancel"</a>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Saving..." } else { "Save Conference" }}
                        </button>
                    </div>
                </form>
            </div>
        </AdminLayout>
    }
}
