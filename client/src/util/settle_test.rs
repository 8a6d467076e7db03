use std::sync::{Arc, Mutex};

use super::*;

fn counting_callback(hits: &Arc<Mutex<Vec<String>>>) -> Callback<String> {
    let hits = Arc::clone(hits);
    Callback::new(move |value: String| hits.lock().unwrap().push(value))
}

#[test]
fn settle_dialog_runs_callback_on_success() {
    let owner = Owner::new();
    let hits = Arc::new(Mutex::new(Vec::new()));
    let (on_done, error, busy) =
        owner.with(|| (counting_callback(&hits), RwSignal::new(None::<String>), RwSignal::new(true)));

    assert!(settle_dialog(Ok("User created.".to_owned()), on_done, error, busy));
    assert_eq!(*hits.lock().unwrap(), vec!["User created.".to_owned()]);
    assert_eq!(error.get_untracked(), None);
}

#[test]
fn settle_dialog_reports_error_and_unlocks_form() {
    let owner = Owner::new();
    let hits = Arc::new(Mutex::new(Vec::new()));
    let (on_done, error, busy) =
        owner.with(|| (counting_callback(&hits), RwSignal::new(None::<String>), RwSignal::new(true)));

    assert!(!settle_dialog(Err(ApiError::Status { status: 403 }), on_done, error, busy));
    assert!(hits.lock().unwrap().is_empty());
    assert!(error.get_untracked().is_some());
    assert!(!busy.get_untracked());
}

#[test]
fn settle_dialog_after_owner_disposed_is_a_no_op() {
    let owner = Owner::new();
    let hits = Arc::new(Mutex::new(Vec::new()));
    let (on_done, error, busy) =
        owner.with(|| (counting_callback(&hits), RwSignal::new(None::<String>), RwSignal::new(true)));
    owner.cleanup();

    assert!(!settle_dialog(Ok("late".to_owned()), on_done, error, busy));
    assert!(!settle_dialog(Err(ApiError::Unavailable), on_done, error, busy));
    assert!(hits.lock().unwrap().is_empty());
}

#[test]
fn clear_selection_only_clears_matching_row() {
    let owner = Owner::new();
    let selected = owner.with(|| RwSignal::new(Some("S1".to_owned())));

    clear_selection(selected, "S2");
    assert_eq!(selected.get_untracked(), Some("S1".to_owned()));
    clear_selection(selected, "S1");
    assert_eq!(selected.get_untracked(), None);
}

#[test]
fn clear_selection_after_owner_disposed_is_a_no_op() {
    let owner = Owner::new();
    let selected = owner.with(|| RwSignal::new(Some("S1".to_owned())));
    owner.cleanup();

    clear_selection(selected, "S1");
}
