//! Admin login page: exchanges the admin value for a session marker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server checks the credential and issues the token; this page only
//! persists the marker and moves on to the protected landing route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::GateState;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::session_gate::LANDING_PATH;
use crate::util::session_store::SessionStore;

const MISSING_FIELDS_MESSAGE: &str = "Enter your email and admin value.";

/// Trim the email and require both fields. The admin value is passed through
/// untouched since the credential comparison is exact.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let gate = expect_context::<RwSignal<GateState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    Effect::new(move || {
        let state = GateState::evaluate(&SessionStore::browser());
        if state.is_authorized() {
            gate.set(state);
            navigate(LANDING_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::login(&email_value, &password_value).await.and_then(|marker| {
                SessionStore::browser().write(&marker)?;
                Ok(marker)
            });
            match result {
                Ok(marker) => {
                    log::info!("admin session started");
                    gate.set(GateState::Authorized(marker));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(LANDING_PATH);
                    }
                }
                Err(e) => {
                    error.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    let toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Portal"</h1>
                <p class="login-card__subtitle">"Enter your credentials to access the dashboard"</p>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Admin Value"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="value"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In to Dashboard" }}
                    </button>
                </form>
                <div class="login-card__footer">
                    <a href="/" class="login-card__back">"Back to Homepage"</a>
                    <button class="btn login-card__theme" on:click=toggle_theme>
                        {move || if ui.get().dark_mode { "☀ Light" } else { "☾ Dark" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
