//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome, forms and dialogs. They read the
//! session from context and call the gateway through `net::api`; list state
//! they act on is owned by the page that mounts them.

pub mod confirm_dialog;
pub mod create_shipment_form;
pub mod footer;
pub mod login_form;
pub mod navbar;
pub mod notice_banner;
pub mod pager;
pub mod route_guard;
pub mod shipment_dialogs;
pub mod shipment_fields;
pub mod track_shipment_form;
pub mod tracking_timeline;
pub mod upload_proof_form;
pub mod user_dialogs;
