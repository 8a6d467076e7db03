//! Shared reactive state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Only the session is application-wide. Page data (shipment and user lists,
//! dialog selections) lives in page-local signals and is dropped on
//! navigation.

pub mod auth;
