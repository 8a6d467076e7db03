use super::*;
use crate::net::types::{ContactInfo, Role, StatusEntry};

fn shipment(id: &str, tracking: &str, sender: &str, carrier: &str, status: &str) -> Shipment {
    Shipment {
        shipment_id: id.to_owned(),
        tracking_number: tracking.to_owned(),
        sender: ContactInfo { name: sender.to_owned(), address: "1 Rue".to_owned() },
        receiver: ContactInfo { name: "Receiver".to_owned(), address: "2 Rue".to_owned() },
        carrier: carrier.to_owned(),
        status: status.to_owned(),
        ..Shipment::default()
    }
}

fn user(id: i64, name: &str, email: &str, role: Role) -> UserRecord {
    UserRecord {
        user_id: id,
        name: name.to_owned(),
        email: email.to_owned(),
        address: String::new(),
        role,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Search
// =============================================================

#[test]
fn blank_query_matches_everything() {
    assert!(matches_query("", &["anything"]));
    assert!(matches_query("   ", &[]));
}

#[test]
fn query_is_case_insensitive_and_trimmed() {
    assert!(matches_query("  dhl ", &["DHL Express"]));
    assert!(!matches_query("ups", &["DHL Express"]));
}

#[test]
fn filter_shipments_searches_all_columns() {
    let list = vec![
        shipment("S-1", "TN-AAA", "Alice", "DHL", "CREATED"),
        shipment("S-2", "TN-BBB", "Bob", "UPS", "DELIVERED"),
    ];
    assert_eq!(filter_shipments(&list, "tn-bbb").len(), 1);
    assert_eq!(filter_shipments(&list, "alice")[0].shipment_id, "S-1");
    assert_eq!(filter_shipments(&list, "ups")[0].shipment_id, "S-2");
    assert_eq!(filter_shipments(&list, "delivered")[0].shipment_id, "S-2");
    assert_eq!(filter_shipments(&list, "receiver").len(), 2);
    assert!(filter_shipments(&list, "fedex").is_empty());
}

#[test]
fn filter_shipments_matches_latest_history_status() {
    let mut s = shipment("S-3", "TN-C", "Cy", "DHL", "CREATED");
    s.status_history.push(StatusEntry { status: "IN_TRANSIT".to_owned(), ..StatusEntry::default() });
    assert_eq!(filter_shipments(&[s], "transit").len(), 1);
}

#[test]
fn filter_users_by_name_email_role() {
    let list = vec![
        user(1, "Ada", "ada@example.com", Role::Admin),
        user(2, "Bo", "bo@example.com", Role::User),
    ];
    assert_eq!(filter_users(&list, "ADA").len(), 1);
    assert_eq!(filter_users(&list, "bo@").len(), 1);
    assert_eq!(filter_users(&list, "admin")[0].user_id, 1);
    assert_eq!(filter_users(&list, "example").len(), 2);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_rounds_up_and_never_zero() {
    assert_eq!(page_count(0, PAGE_SIZE), 1);
    assert_eq!(page_count(10, PAGE_SIZE), 1);
    assert_eq!(page_count(11, PAGE_SIZE), 2);
    assert_eq!(page_count(5, 0), 1);
}

#[test]
fn clamp_page_stays_in_range() {
    assert_eq!(clamp_page(0, 25, 10), 1);
    assert_eq!(clamp_page(2, 25, 10), 2);
    assert_eq!(clamp_page(9, 25, 10), 3);
}

#[test]
fn page_slice_returns_requested_window() {
    let items: Vec<u32> = (1..=25).collect();
    assert_eq!(page_slice(&items, 1, 10), (1..=10).collect::<Vec<_>>());
    assert_eq!(page_slice(&items, 3, 10), vec![21, 22, 23, 24, 25]);
}

#[test]
fn page_slice_clamps_when_filter_shrinks_list() {
    let items: Vec<u32> = (1..=4).collect();
    assert_eq!(page_slice(&items, 5, 10), vec![1, 2, 3, 4]);
    assert!(page_slice::<u32>(&[], 1, 10).is_empty());
}
