//! Edit and add-tracking dialogs for the parcel management table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from a table row on `/parcel`. Both dialogs call the gateway
//! themselves and report back through callbacks so the page can refresh its
//! list.

use leptos::prelude::*;

use crate::components::shipment_fields::ShipmentFields;
use crate::net::types::{Shipment, ShipmentRequest};
use crate::state::auth::use_session;
#[cfg(feature = "hydrate")]
use crate::util::settle::settle_dialog;
use crate::util::validation::{ShipmentForm, validate_shipment, validate_tracking_status};

/// Edit sender, receiver, carrier and weight of an existing shipment.
#[component]
pub fn EditShipmentDialog(shipment: Shipment, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let original = ShipmentRequest::from_shipment(&shipment);
    let form = RwSignal::new(ShipmentForm::from_request(&original));
    let errors = RwSignal::new(Vec::<&'static str>::new());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let shipment_id = shipment.shipment_id;
    let title = format!("Edit shipment {shipment_id}");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let mut request = match validate_shipment(&form.get()) {
            Ok(request) => request,
            Err(list) => {
                errors.set(list);
                return;
            }
        };
        errors.set(Vec::new());
        failure.set(None);
        request.shipment_id.clone_from(&original.shipment_id);
        request.user_id = original.user_id;
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let shipment_id = shipment_id.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::update_shipment(&shipment_id, &request).await;
                if let Err(e) = &result {
                    log::warn!("[shipment] update {shipment_id} failed: {e}");
                }
                settle_dialog(result, on_saved, failure, busy);
            });
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2 class="dialog__title">{title}</h2>
                <ShipmentFields form=form/>
                <Show when=move || !errors.get().is_empty()>
                    <ul class="form-error">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                </Show>
                <Show when=move || failure.get().is_some()>
                    <p class="form-error">{move || failure.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Append a status entry to a shipment's tracking history.
#[component]
pub fn AddTrackingDialog(shipment: Shipment, on_close: Callback<()>, on_added: Callback<()>) -> impl IntoView {
    let session = use_session();
    let status = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let tracking_number = shipment.tracking_number;
    let title = format!("Add tracking status to {tracking_number}");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_tracking_status(&status.get(), &location.get(), &note.get()) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let Some(identity) = session.current_identity() else {
            error.set(Some("Sign in to add a tracking status.".to_owned()));
            return;
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let request = crate::net::types::AddTrackingStatusRequest {
                status: input.status,
                location: input.location,
                note: input.note,
                tracking_number: tracking_number.clone(),
                timestamp: crate::util::format::now_rfc3339(),
                user_id: identity.user_id,
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::add_tracking_status(&request).await;
                settle_dialog(result, on_added, error, busy);
            });
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2 class="dialog__title">{title}</h2>
                <label class="dialog__label">
                    "Status"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || status.get()
                        on:input=move |ev| status.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Location"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Note"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Add status"
                    </button>
                </div>
            </form>
        </div>
    }
}
