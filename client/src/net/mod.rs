//! Networking modules for the gateway REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `gateway` is the auth seam consumed by the
//! session store, `error` holds the typed failures, and `types` defines the
//! wire schema.

pub mod api;
pub mod error;
pub mod gateway;
pub mod types;
