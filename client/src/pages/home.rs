//! Public landing page: create a shipment and track one.

use leptos::prelude::*;

use crate::components::create_shipment_form::CreateShipmentForm;
use crate::components::track_shipment_form::TrackShipmentForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1 class="page__title">"Welcome to The Shipping Service"</h1>
            <div class="home-page__columns">
                <CreateShipmentForm/>
                <TrackShipmentForm/>
            </div>
        </section>
    }
}
