//! Colored pill for a conference status.

use leptos::prelude::*;

use crate::net::types::ConferenceStatus;

#[component]
pub fn StatusBadge(status: ConferenceStatus) -> impl IntoView {
    let class = format!("status-badge status-badge--{}", status.css_modifier());
    view! { <span class=class>{status.label()}</span> }
}
