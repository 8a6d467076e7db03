//! Completion of requests started from a view that may have closed since.
//!
//! DESIGN
//! ======
//! Responses land after an `.await`, when the dialog or page that issued the
//! request can already be disposed (the user navigated away). Every write here
//! goes through the `try_*` APIs, so a late response into a torn-down owner
//! is a no-op instead of a panic.

#[cfg(test)]
#[path = "settle_test.rs"]
mod settle_test;

use leptos::prelude::*;

use crate::net::error::ApiError;

/// Finish a dialog request: on success hand the value to `on_done`, on
/// failure show the error and re-enable the form.
///
/// Returns `true` when `on_done` actually ran.
pub fn settle_dialog<T: 'static>(
    result: Result<T, ApiError>,
    on_done: Callback<T>,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
) -> bool {
    match result {
        Ok(value) => on_done.try_run(value).is_some(),
        Err(e) => {
            error.try_set(Some(e.user_message()));
            busy.try_set(false);
            false
        }
    }
}

/// Drop the row selection if it still points at `shipment_id`.
pub fn clear_selection(selected: RwSignal<Option<String>>, shipment_id: &str) {
    selected.try_update(|current| {
        if current.as_deref() == Some(shipment_id) {
            *current = None;
        }
    });
}
