//! Public tracking lookup on the main page.

use leptos::prelude::*;

use crate::components::tracking_timeline::TrackingTimeline;
use crate::net::types::Tracking;
use crate::util::validation::validate_tracking_number;

#[component]
pub fn TrackShipmentForm() -> impl IntoView {
    let number = RwSignal::new(String::new());
    let result = RwSignal::new(None::<Tracking>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        result.set(None);
        let tracking_number = match validate_tracking_number(&number.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::track_shipment(&tracking_number).await {
                Ok(tracking) => {
                    result.try_set(Some(tracking));
                }
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <form id="track" class="card track-form" on:submit=on_submit>
            <h2 class="card__title">"Track a parcel"</h2>
            <label class="form__label">
                "Tracking number"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || number.get()
                    on:input=move |ev| number.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                "Track"
            </button>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                result
                    .get()
                    .map(|tracking| {
                        view! {
                            <div class="track-form__result">
                                <p>
                                    "Current status: "
                                    <strong>{tracking.current_status}</strong>
                                </p>
                                <TrackingTimeline history=tracking.history/>
                            </div>
                        }
                    })
            }}
        </form>
    }
}
