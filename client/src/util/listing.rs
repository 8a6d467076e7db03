//! Client-side search and pagination over already-fetched lists.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::types::{Shipment, UserRecord};

/// Rows per page on the management tables.
pub const PAGE_SIZE: usize = 10;

/// Case-insensitive substring match across `fields`. A blank query matches.
#[must_use]
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Shipments whose id, tracking number, parties, carrier or status match.
#[must_use]
pub fn filter_shipments(shipments: &[Shipment], query: &str) -> Vec<Shipment> {
    shipments
        .iter()
        .filter(|s| {
            matches_query(
                query,
                &[
                    &s.shipment_id,
                    &s.tracking_number,
                    &s.sender.name,
                    &s.receiver.name,
                    &s.carrier,
                    &s.status,
                    s.display_status(),
                ],
            )
        })
        .cloned()
        .collect()
}

/// Users whose name, email or role match.
#[must_use]
pub fn filter_users(users: &[UserRecord], query: &str) -> Vec<UserRecord> {
    users
        .iter()
        .filter(|u| matches_query(query, &[&u.name, &u.email, u.role.as_str()]))
        .cloned()
        .collect()
}

/// Number of pages for `total` rows; an empty list still has one page.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Keep a 1-based page index inside `1..=page_count`.
#[must_use]
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size))
}

/// Rows on 1-based `page`. Out-of-range pages are clamped first.
#[must_use]
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = clamp_page(page, items.len(), page_size);
    items
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect()
}
