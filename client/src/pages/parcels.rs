//! Parcel management: searchable, paginated shipment table with row actions.
//!
//! ARCHITECTURE
//! ============
//! The page owns the loaded list and every dialog selection. Filtering and
//! paging are pure functions from `util::listing`; after any mutation the
//! whole list is fetched again rather than patched locally.
//!
//! Delete is only offered to admins. The gateway enforces the same rule, the
//! hidden button just avoids a guaranteed 403.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice_banner::NoticeBanner;
use crate::components::pager::Pager;
use crate::components::shipment_dialogs::{AddTrackingDialog, EditShipmentDialog};
use crate::components::tracking_timeline::TrackingTimeline;
use crate::net::types::Shipment;
use crate::state::auth::use_session;
use crate::util::format::{format_optional_timestamp, format_weight};
use crate::util::listing::{PAGE_SIZE, filter_shipments, page_slice};
use crate::util::notice::{Notice, flash};
#[cfg(feature = "hydrate")]
use crate::util::settle::clear_selection;

/// Row-level dialog currently open, if any.
#[derive(Clone, Debug, PartialEq)]
enum RowAction {
    Edit(Shipment),
    AddStatus(Shipment),
    Delete(Shipment),
}

#[component]
pub fn ParcelsPage() -> impl IntoView {
    let session = use_session();
    let shipments = RwSignal::new(Vec::<Shipment>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1_usize);
    let selected = RwSignal::new(None::<String>);
    let action = RwSignal::new(None::<RowAction>);
    let notice = RwSignal::new(None::<Notice>);

    let reload = move || {
        loading.try_set(true);
        load_error.try_set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_shipments().await {
                Ok(list) => {
                    log::debug!("[parcels] loaded {} shipments", list.len());
                    shipments.try_set(list);
                }
                Err(e) => {
                    load_error.try_set(Some(e.user_message()));
                }
            }
            loading.try_set(false);
        });
    };

    Effect::new(move || reload());

    let filtered = Memo::new(move |_| filter_shipments(&shipments.get(), &search.get()));
    let rows = move || page_slice(&filtered.get(), page.get(), PAGE_SIZE);
    let selected_shipment = move || {
        let id = selected.get()?;
        shipments.with(|list| list.iter().find(|s| s.shipment_id == id).cloned())
    };

    let close = Callback::new(move |()| action.set(None));
    let after_change = move |message: &'static str| {
        action.set(None);
        flash(notice, Notice::success(message));
        reload();
    };
    let on_saved = Callback::new(move |()| after_change("Shipment updated."));
    let on_added = Callback::new(move |()| after_change("Tracking status added."));
    let on_delete = Callback::new(move |()| {
        let Some(RowAction::Delete(shipment)) = action.get_untracked() else {
            return;
        };
        action.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_shipment(&shipment.shipment_id).await {
                Ok(()) => {
                    clear_selection(selected, &shipment.shipment_id);
                    flash(notice, Notice::success("Shipment deleted."));
                    reload();
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(e.user_message())));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = shipment;
    });

    let table_row = move |shipment: Shipment| {
        let id = shipment.shipment_id.clone();
        let row_id = id.clone();
        let for_edit = shipment.clone();
        let for_status = shipment.clone();
        let for_delete = shipment.clone();
        view! {
            <tr
                class=move || {
                    if selected.get().as_deref() == Some(row_id.as_str()) { "table__row table__row--selected" } else { "table__row" }
                }
                on:click=move |_| selected.set(Some(id.clone()))
            >
                <td>{shipment.shipment_id.clone()}</td>
                <td>{shipment.tracking_number.clone()}</td>
                <td>{shipment.sender.name.clone()}</td>
                <td>{shipment.receiver.name.clone()}</td>
                <td>{shipment.carrier.clone()}</td>
                <td>{format_weight(shipment.weight)}</td>
                <td>{shipment.display_status().to_owned()}</td>
                <td>{format_optional_timestamp(shipment.created_at.as_deref())}</td>
                <td class="table__actions" on:click=move |ev| ev.stop_propagation()>
                    <button class="btn" on:click=move |_| action.set(Some(RowAction::Edit(for_edit.clone())))>
                        "Edit"
                    </button>
                    <button class="btn" on:click=move |_| action.set(Some(RowAction::AddStatus(for_status.clone())))>
                        "Add status"
                    </button>
                    {move || {
                        let target = for_delete.clone();
                        session
                            .is_admin()
                            .then(|| {
                                view! {
                                    <button
                                        class="btn btn--danger"
                                        on:click=move |_| action.set(Some(RowAction::Delete(target.clone())))
                                    >
                                        "Delete"
                                    </button>
                                }
                            })
                    }}
                </td>
            </tr>
        }
    };

    view! {
        <section class="parcels-page">
            <div class="page__header">
                <h1 class="page__title">"Parcels"</h1>
                <input
                    class="form__input page__search"
                    type="search"
                    placeholder="Search by id, tracking number, name, carrier or status"
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
                <button class="btn" disabled=move || loading.get() on:click=move |_| reload()>
                    "Refresh"
                </button>
            </div>

            <NoticeBanner notice=notice/>
            <Show when=move || load_error.get().is_some()>
                <p class="form-error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Tracking"</th>
                        <th>"Sender"</th>
                        <th>"Receiver"</th>
                        <th>"Carrier"</th>
                        <th>"Weight"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows().into_iter().map(table_row).collect_view()}
                </tbody>
            </table>
            <Show when=move || !loading.get() && filtered.with(Vec::is_empty)>
                <p class="table__empty">"No shipments match."</p>
            </Show>
            <Pager page=page total=Signal::derive(move || filtered.with(Vec::len))/>

            {move || {
                selected_shipment()
                    .map(|shipment| {
                        view! {
                            <section class="card parcels-page__timeline">
                                <h2 class="card__title">{format!("Tracking history for {}", shipment.tracking_number)}</h2>
                                <TrackingTimeline history=shipment.status_history/>
                            </section>
                        }
                    })
            }}

            {move || {
                action
                    .get()
                    .map(|current| match current {
                        RowAction::Edit(shipment) => {
                            view! { <EditShipmentDialog shipment=shipment on_close=close on_saved=on_saved/> }.into_any()
                        }
                        RowAction::AddStatus(shipment) => {
                            view! { <AddTrackingDialog shipment=shipment on_close=close on_added=on_added/> }.into_any()
                        }
                        RowAction::Delete(shipment) => {
                            view! {
                                <ConfirmDialog
                                    title="Delete shipment"
                                    message=format!("Delete shipment {}? This cannot be undone.", shipment.shipment_id)
                                    on_cancel=close
                                    on_confirm=on_delete
                                />
                            }
                                .into_any()
                        }
                    })
            }}
        </section>
    }
}
