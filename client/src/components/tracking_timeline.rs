//! Ordered list of a shipment's status history, oldest first.

use leptos::prelude::*;

use crate::net::types::StatusEntry;
use crate::util::format::format_optional_timestamp;

#[component]
pub fn TrackingTimeline(history: Vec<StatusEntry>) -> impl IntoView {
    if history.is_empty() {
        return view! { <p class="timeline__empty">"No tracking events yet."</p> }.into_any();
    }
    view! {
        <ol class="timeline">
            {history
                .into_iter()
                .map(|entry| {
                    view! {
                        <li class="timeline__item">
                            <span class="timeline__status">{entry.status}</span>
                            <span class="timeline__time">
                                {format_optional_timestamp(entry.timestamp.as_deref())}
                            </span>
                            {entry.location.map(|location| view! { <span class="timeline__location">{location}</span> })}
                            {entry
                                .note
                                .filter(|note| !note.is_empty())
                                .map(|note| view! { <p class="timeline__note">{note}</p> })}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_any()
}
