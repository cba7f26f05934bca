//! Public listing card for one conference.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::types::{Conference, DEFAULT_IMAGE_URL};

#[component]
pub fn ConferenceCard(conference: Conference) -> impl IntoView {
    let image = if conference.image_url.trim().is_empty() {
        DEFAULT_IMAGE_URL.to_owned()
    } else {
        conference.image_url.clone()
    };
    let date = conference.display_date().to_owned();
    let website = conference.website.clone();
    let delegates = (!conference.delegates.is_empty()).then(|| format!("{} delegates", conference.delegates));

    view! {
        <article class="conference-card">
            <img class="conference-card__image" src=image alt=conference.name.clone()/>
            <div class="conference-card__body">
                <StatusBadge status=conference.status/>
                <h3 class="conference-card__name">{conference.name}</h3>
                <p class="conference-card__meta">{conference.location}" · "{date}</p>
                {delegates.map(|text| view! { <p class="conference-card__delegates">{text}</p> })}
                <p class="conference-card__description">{conference.description}</p>
                {website.map(|href| view! { <a class="conference-card__link" href=href target="_blank">"Visit website"</a> })}
            </div>
        </article>
    }
}
