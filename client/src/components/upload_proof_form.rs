//! Upload and download of deposit/delivery proof files.
//!
//! SYSTEM CONTEXT
//! ==============
//! Files are read straight from the `<input type="file">` element at click
//! time and posted as multipart form data; nothing is buffered in signals.

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::net::types::ProofKind;
use crate::util::notice::Notice;
use crate::util::validation::validate_shipment_id;

#[component]
pub fn UploadProofForm() -> impl IntoView {
    let shipment_id = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);
    let deposit_input = NodeRef::<Input>::new();
    let delivery_input = NodeRef::<Input>::new();

    let checked_id = move || match validate_shipment_id(&shipment_id.get()) {
        Ok(id) => Some(id),
        Err(message) => {
            notice.set(Some(Notice::error(message)));
            None
        }
    };

    let upload = move |kind: ProofKind| {
        if busy.get() {
            return;
        }
        let Some(id) = checked_id() else {
            return;
        };
        let input = match kind {
            ProofKind::Deposit => deposit_input,
            ProofKind::Delivery => delivery_input,
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = input.get().and_then(|el| el.files()).and_then(|files| files.get(0)) else {
                notice.set(Some(Notice::error(format!("Choose a {} file first.", kind.label().to_lowercase()))));
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_proof(&id, kind, &file).await {
                    Ok(()) => {
                        crate::util::notice::flash(notice, Notice::success(format!("{} uploaded.", kind.label())));
                    }
                    Err(e) => {
                        log::warn!("[proofs] upload {} for {id} failed: {e}", kind.as_str());
                        notice.try_set(Some(Notice::error(e.user_message())));
                    }
                }
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, input);
    };

    let download = move |kind: ProofKind| {
        let Some(id) = checked_id() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::download_proof(&id, kind).await {
                notice.try_set(Some(Notice::error(e.user_message())));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, kind);
    };

    let proof_row = move |kind: ProofKind, node: NodeRef<Input>| {
        view! {
            <div class="proof-row">
                <span class="proof-row__label">{kind.label()}</span>
                <input class="form__input" type="file" node_ref=node/>
                <button type="button" class="btn btn--primary" disabled=move || busy.get() on:click=move |_| upload(kind)>
                    "Upload"
                </button>
                <button type="button" class="btn" on:click=move |_| download(kind)>
                    "Download"
                </button>
            </div>
        }
    };

    view! {
        <section class="card proofs-form">
            <h2 class="card__title">"Shipment proofs"</h2>
            <label class="form__label">
                "Shipment id"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || shipment_id.get()
                    on:input=move |ev| shipment_id.set(event_target_value(&ev))
                />
            </label>
            {proof_row(ProofKind::Deposit, deposit_input)}
            {proof_row(ProofKind::Delivery, delivery_input)}
            <NoticeBanner notice=notice/>
        </section>
    }
}
