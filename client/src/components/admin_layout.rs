//! Admin chrome: sidebar navigation, sign-out, and the session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected admin page renders inside `AdminLayout`. The layout owns
//! the gate installation so no admin route can forget it, and it renders
//! `children` only once the gate reports `Authorized`.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::GateState;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::session_store::SessionStore;
use crate::util::session_gate::{LANDING_PATH, end_session, install_session_gate};

const MENU: [(&str, &str); 2] = [("Dashboard", LANDING_PATH), ("Conferences", "/admin/conferences")];

/// Whether the sidebar item for `href` is active at `pathname`.
pub fn menu_item_active(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

/// Protected admin page frame. Denied visitors are redirected to login and
/// never see `children`.
#[component]
pub fn AdminLayout(children: ChildrenFn) -> impl IntoView {
    let gate = expect_context::<RwSignal<GateState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let location = use_location();

    install_session_gate(gate, SessionStore::browser(), navigate);

    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    let on_sign_out = move |_| end_session(gate);
    let toggle_sidebar = move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open);
    let toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <Show
            when=move || gate.get().is_authorized()
            fallback=move || {
                view! {
                    <div class="admin-gate">
                        <p>{move || if gate.get().is_denied() { "Redirecting to login..." } else { "Checking session..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin-layout">
                <button class="admin-layout__menu-btn" on:click=toggle_sidebar aria-label="Toggle menu">
                    {move || if ui.get().sidebar_open { "✕" } else { "☰" }}
                </button>
                <aside class="admin-sidebar" class:admin-sidebar--open=move || ui.get().sidebar_open>
                    <div class="admin-sidebar__logo">
                        <h1>"Singapore MUN"</h1>
                    </div>
                    <nav class="admin-sidebar__menu">
                        {MENU
                            .into_iter()
                            .map(|(title, href)| {
                                view! {
                                    <a
                                        href=href
                                        class="admin-sidebar__item"
                                        class:admin-sidebar__item--active=move || {
                                            menu_item_active(&location.pathname.get(), href)
                                        }
                                    >
                                        {title}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="admin-sidebar__footer">
                        <span class="admin-sidebar__identity">{move || gate.get().display_identity()}</span>
                        <button class="btn admin-sidebar__theme" on:click=toggle_theme title="Toggle dark mode">
                            {move || if ui.get().dark_mode { "☀ Light" } else { "☾ Dark" }}
                        </button>
                        <button class="btn admin-sidebar__sign-out" on:click=on_sign_out>
                            "Sign Out"
                        </button>
                    </div>
                </aside>
                <main class="admin-content" on:click=move |_| ui.update(|u| u.sidebar_open = false)>
                    {children()}
                </main>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_active_exact_match() {
        assert!(menu_item_active("/admin/dashboard", "/admin/dashboard"));
    }

    #[test]
    fn menu_item_active_nested_route() {
        assert!(menu_item_active("/admin/conferences/new", "/admin/conferences"));
    }

    #[test]
    fn menu_item_inactive_for_shared_prefix_only() {
        assert!(!menu_item_active("/admin/conferences-archive", "/admin/conferences"));
        assert!(!menu_item_active("/admin/dashboard", "/admin/conferences"));
    }
}
