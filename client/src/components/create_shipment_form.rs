//! Shipment creation form on the main page.
//!
//! ERROR HANDLING
//! ==============
//! Every invalid field is listed at once. The gateway requires a session to
//! create shipments, so the form refuses to submit while signed out instead
//! of waiting for a 401.

use leptos::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::components::shipment_fields::ShipmentFields;
use crate::state::auth::use_session;
use crate::util::notice::Notice;
use crate::util::validation::{ShipmentForm, validate_shipment};

#[component]
pub fn CreateShipmentForm() -> impl IntoView {
    let session = use_session();
    let form = RwSignal::new(ShipmentForm::default());
    let errors = RwSignal::new(Vec::<&'static str>::new());
    let notice = RwSignal::new(None::<Notice>);
    let tracking_number = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        tracking_number.set(None);
        notice.set(None);
        let Some(identity) = session.current_identity() else {
            notice.set(Some(Notice::error("Sign in to create a shipment.")));
            return;
        };
        let mut request = match validate_shipment(&form.get()) {
            Ok(request) => request,
            Err(list) => {
                errors.set(list);
                return;
            }
        };
        errors.set(Vec::new());
        request.user_id = Some(identity.user_id);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_shipment(&request).await {
                Ok(created) => {
                    tracking_number.try_set(created.tracking_number);
                    notice.try_set(Some(Notice::success("Shipment created.")));
                    form.try_set(ShipmentForm::default());
                }
                Err(e) => {
                    log::warn!("[shipment] create failed: {e}");
                    notice.try_set(Some(Notice::error(e.user_message())));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <form class="card shipment-form" on:submit=on_submit>
            <h2 class="card__title">"Send a parcel"</h2>
            <ShipmentFields form=form/>
            <Show when=move || !errors.get().is_empty()>
                <ul class="form-error">
                    {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                </ul>
            </Show>
            <NoticeBanner notice=notice/>
            {move || {
                tracking_number
                    .get()
                    .map(|number| {
                        view! {
                            <p class="shipment-form__tracking">
                                "Tracking number: "
                                <strong>{number}</strong>
                            </p>
                        }
                    })
            }}
            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                "Create shipment"
            </button>
        </form>
    }
}
