//! Seam between the session store and the gateway's auth endpoints.
//!
//! DESIGN
//! ======
//! The session store is generic over `AuthGateway` so its state machine can be
//! exercised without a browser. Futures are not required to be `Send`: they run
//! on the single-threaded UI executor via `spawn_local`.

use std::future::Future;

use super::api;
use super::error::ApiError;
use super::types::{Credentials, Identity};

/// The three credential-bearing calls the session store depends on.
pub trait AuthGateway: Clone + Send + Sync + 'static {
    /// `GET /auth/me`: `Ok(None)` when the server reports no session.
    fn current_identity(&self) -> impl Future<Output = Result<Option<Identity>, ApiError>>;

    /// `POST /auth/login`.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<Identity, ApiError>>;

    /// `POST /auth/logout`.
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;
}

/// Cookie-session gateway reached through same-origin `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthGateway;

impl AuthGateway for HttpAuthGateway {
    fn current_identity(&self) -> impl Future<Output = Result<Option<Identity>, ApiError>> {
        api::fetch_current_identity()
    }

    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<Identity, ApiError>> {
        let credentials = credentials.clone();
        async move { api::login(&credentials).await }
    }

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> {
        api::logout()
    }
}
