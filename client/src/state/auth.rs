//! Session store: the single owner of "who is signed in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once by `App` through context. Route guards, the navbar, and
//! management views read the derived session flags; only `restore`, `login`
//! and `logout` write.
//!
//! DESIGN
//! ======
//! The session is backed by the gateway's cookie, never by locally persisted
//! credentials. Every write replaces the whole `Session` value and bumps a
//! generation counter, so a slow `/auth/me` response cannot overwrite a login
//! or logout that completed after it was issued. Writes into a disposed
//! reactive owner are dropped silently.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::error::AuthError;
use crate::net::gateway::{AuthGateway, HttpAuthGateway};
use crate::net::types::{Credentials, Identity, Role};

// =============================================================================
// SESSION
// =============================================================================

/// Current principal, or its absence. Absence is a valid state, not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Absent,
    Present(Identity),
}

impl Session {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Absent => None,
            Self::Present(identity) => Some(identity),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Present(identity) if identity.role == Role::Admin)
    }
}

impl From<Option<Identity>> for Session {
    fn from(identity: Option<Identity>) -> Self {
        identity.map_or(Self::Absent, Self::Present)
    }
}

// =============================================================================
// AUTH STATE
// =============================================================================

/// Reactive payload held by the session store.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Session,
    /// `true` while a restore call is in flight.
    pub restoring: bool,
    generation: u64,
}

impl AuthState {
    /// Start a restore and return the ticket its response must present.
    pub fn begin_restore(&mut self) -> u64 {
        self.generation += 1;
        self.restoring = true;
        self.generation
    }

    /// Apply a restore result. Returns `false` (and changes nothing) when a
    /// newer write has happened since `ticket` was issued.
    pub fn finish_restore(&mut self, ticket: u64, identity: Option<Identity>) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.restoring = false;
        self.session = identity.into();
        true
    }

    pub fn sign_in(&mut self, identity: Identity) {
        self.generation += 1;
        self.restoring = false;
        self.session = Session::Present(identity);
    }

    pub fn sign_out(&mut self) {
        self.generation += 1;
        self.restoring = false;
        self.session = Session::Absent;
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Injectable handle over the reactive auth state and its gateway.
///
/// `Copy` so it can be captured freely by event handlers and spawned tasks.
pub struct SessionStore<G: AuthGateway = HttpAuthGateway> {
    state: RwSignal<AuthState>,
    gateway: StoredValue<G>,
}

/// The store type `App` provides to the component tree.
pub type AppSession = SessionStore<HttpAuthGateway>;

impl<G: AuthGateway> Clone for SessionStore<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: AuthGateway> Copy for SessionStore<G> {}

impl<G: AuthGateway> SessionStore<G> {
    pub fn new(gateway: G) -> Self {
        Self { state: RwSignal::new(AuthState::default()), gateway: StoredValue::new(gateway) }
    }

    // -------------------------------------------------------------------------
    // Readers (tracked)
    // -------------------------------------------------------------------------

    pub fn session(&self) -> Session {
        self.state.try_with(|s| s.session.clone()).unwrap_or_default()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.state
            .try_with(|s| s.session.identity().cloned())
            .flatten()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .try_with(|s| s.session.is_authenticated())
            .unwrap_or(false)
    }

    pub fn is_admin(&self) -> bool {
        self.state.try_with(|s| s.session.is_admin()).unwrap_or(false)
    }

    pub fn is_restoring(&self) -> bool {
        self.state.try_with(|s| s.restoring).unwrap_or(false)
    }

    /// Snapshot without subscribing the caller; used by the per-navigation
    /// route guard.
    pub fn session_untracked(&self) -> Session {
        self.state
            .try_with_untracked(|s| s.session.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Re-establish the session from the server cookie. Never fails: any error
    /// degrades to `Session::Absent`.
    pub async fn restore(self) {
        let Some(ticket) = self.state.try_update(AuthState::begin_restore) else {
            return;
        };
        let Some(gateway) = self.gateway.try_get_value() else {
            return;
        };

        let identity = match gateway.current_identity().await {
            Ok(Some(identity)) => {
                log::info!("[auth] session restored for user {}", identity.user_id);
                Some(identity)
            }
            Ok(None) => {
                log::info!("[auth] no active session");
                None
            }
            Err(e) => {
                log::warn!("[auth] session restore failed: {e}");
                None
            }
        };

        let applied = self
            .state
            .try_update(|s| s.finish_restore(ticket, identity))
            .unwrap_or(false);
        if !applied {
            log::debug!("[auth] discarded stale restore response");
        }
    }

    /// Sign in with email and password.
    ///
    /// On failure the current session is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` for any rejected or
    /// unreachable login.
    pub async fn login(self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let gateway = self
            .gateway
            .try_get_value()
            .ok_or(AuthError::AuthenticationFailed)?;
        let credentials = Credentials { email: email.trim().to_owned(), password: password.to_owned() };

        match gateway.login(&credentials).await {
            Ok(identity) => {
                log::info!("[auth] signed in as user {}", identity.user_id);
                self.state.try_update(|s| s.sign_in(identity.clone()));
                Ok(identity)
            }
            Err(e) => {
                log::warn!("[auth] login failed: {e}");
                Err(AuthError::AuthenticationFailed)
            }
        }
    }

    /// End the session. Local state is cleared even when the server call
    /// fails; calling this with no session is a no-op apart from the request.
    pub async fn logout(self) {
        if let Some(gateway) = self.gateway.try_get_value() {
            if let Err(e) = gateway.logout().await {
                log::warn!("[auth] logout call failed: {e}");
            }
        }
        self.state.try_update(AuthState::sign_out);
    }
}

/// Fetch the session store installed by `App`.
///
/// # Panics
///
/// Panics if called outside the `App` component tree.
pub fn use_session() -> AppSession {
    expect_context::<AppSession>()
}
