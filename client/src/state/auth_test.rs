use std::future::{Future, ready};
use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;

// =============================================================
// Fixtures
// =============================================================

fn identity(user_id: i64, role: Role) -> Identity {
    Identity {
        user_id,
        name: format!("user-{user_id}"),
        email: format!("user{user_id}@example.com"),
        address: String::new(),
        role,
    }
}

/// Scripted gateway; each call returns the currently configured result.
#[derive(Clone)]
struct FakeGateway {
    me: Arc<Mutex<Result<Option<Identity>, ApiError>>>,
    login: Arc<Mutex<Result<Identity, ApiError>>>,
    logout: Arc<Mutex<Result<(), ApiError>>>,
    seen_credentials: Arc<Mutex<Vec<Credentials>>>,
}

impl FakeGateway {
    fn new() -> Self {
        Self {
            me: Arc::new(Mutex::new(Ok(None))),
            login: Arc::new(Mutex::new(Err(ApiError::Status { status: 401 }))),
            logout: Arc::new(Mutex::new(Ok(()))),
            seen_credentials: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn with_me(self, result: Result<Option<Identity>, ApiError>) -> Self {
        *self.me.lock().unwrap() = result;
        self
    }

    fn with_login(self, result: Result<Identity, ApiError>) -> Self {
        *self.login.lock().unwrap() = result;
        self
    }

    fn with_logout(self, result: Result<(), ApiError>) -> Self {
        *self.logout.lock().unwrap() = result;
        self
    }
}

impl AuthGateway for FakeGateway {
    fn current_identity(&self) -> impl Future<Output = Result<Option<Identity>, ApiError>> {
        ready(self.me.lock().unwrap().clone())
    }

    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<Identity, ApiError>> {
        self.seen_credentials.lock().unwrap().push(credentials.clone());
        ready(self.login.lock().unwrap().clone())
    }

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> {
        ready(self.logout.lock().unwrap().clone())
    }
}

// =============================================================
// Session derivations
// =============================================================

#[test]
fn absent_session_is_neither_authenticated_nor_admin() {
    let session = Session::Absent;
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert!(session.identity().is_none());
}

#[test]
fn user_session_is_authenticated_but_not_admin() {
    let session = Session::Present(identity(1, Role::User));
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn admin_session_is_authenticated_and_admin() {
    let session = Session::Present(identity(1, Role::Admin));
    assert!(session.is_authenticated());
    assert!(session.is_admin());
}

#[test]
fn session_from_option_maps_none_to_absent() {
    assert_eq!(Session::from(None), Session::Absent);
    assert_eq!(Session::from(Some(identity(2, Role::User))), Session::Present(identity(2, Role::User)));
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn auth_state_default_has_no_session() {
    let state = AuthState::default();
    assert_eq!(state.session, Session::Absent);
    assert!(!state.restoring);
}

#[test]
fn finish_restore_applies_current_ticket() {
    let mut state = AuthState::default();
    let ticket = state.begin_restore();
    assert!(state.restoring);
    assert!(state.finish_restore(ticket, Some(identity(4, Role::User))));
    assert!(state.session.is_authenticated());
    assert!(!state.restoring);
}

#[test]
fn restore_response_after_login_is_discarded() {
    let mut state = AuthState::default();
    let ticket = state.begin_restore();
    state.sign_in(identity(9, Role::Admin));

    assert!(!state.finish_restore(ticket, None));
    assert_eq!(state.session, Session::Present(identity(9, Role::Admin)));
}

#[test]
fn restore_response_after_logout_is_discarded() {
    let mut state = AuthState::default();
    let ticket = state.begin_restore();
    state.sign_out();

    assert!(!state.finish_restore(ticket, Some(identity(3, Role::User))));
    assert_eq!(state.session, Session::Absent);
}

#[test]
fn older_restore_loses_to_newer_restore() {
    let mut state = AuthState::default();
    let first = state.begin_restore();
    let second = state.begin_restore();

    assert!(state.finish_restore(second, Some(identity(1, Role::User))));
    assert!(!state.finish_restore(first, None));
    assert!(state.session.is_authenticated());
}

// =============================================================
// SessionStore: restore
// =============================================================

#[test]
fn restore_installs_returned_identity() {
    let store = SessionStore::new(FakeGateway::new().with_me(Ok(Some(identity(5, Role::Admin)))));
    block_on(store.restore());
    assert!(store.is_authenticated());
    assert!(store.is_admin());
    assert_eq!(store.current_identity().map(|i| i.user_id), Some(5));
    assert!(!store.is_restoring());
}

#[test]
fn restore_without_session_stays_unauthenticated() {
    let store = SessionStore::new(FakeGateway::new().with_me(Ok(None)));
    block_on(store.restore());
    assert_eq!(store.session(), Session::Absent);
}

#[test]
fn restore_non_success_status_degrades_silently() {
    let store = SessionStore::new(FakeGateway::new().with_me(Err(ApiError::Status { status: 401 })));
    block_on(store.restore());
    assert!(!store.is_authenticated());
    assert!(!store.is_admin());
}

#[test]
fn restore_network_error_degrades_silently() {
    let store = SessionStore::new(FakeGateway::new().with_me(Err(ApiError::Transport("offline".to_owned()))));
    block_on(store.restore());
    assert_eq!(store.session(), Session::Absent);
}

// =============================================================
// SessionStore: login
// =============================================================

#[test]
fn login_success_installs_user_identity() {
    let store = SessionStore::new(FakeGateway::new().with_login(Ok(identity(11, Role::User))));
    let result = block_on(store.login("a@b.io", "pw"));

    assert_eq!(result.map(|i| i.user_id), Ok(11));
    assert!(store.is_authenticated());
    assert!(!store.is_admin());
}

#[test]
fn login_success_replaces_prior_identity() {
    let gateway = FakeGateway::new()
        .with_me(Ok(Some(identity(1, Role::User))))
        .with_login(Ok(identity(2, Role::Admin)));
    let store = SessionStore::new(gateway);
    block_on(store.restore());

    block_on(store.login("admin@b.io", "pw")).unwrap();
    assert_eq!(store.current_identity().map(|i| i.user_id), Some(2));
    assert!(store.is_admin());
}

#[test]
fn login_failure_returns_authentication_failed() {
    let store = SessionStore::new(FakeGateway::new().with_login(Err(ApiError::Status { status: 401 })));
    let result = block_on(store.login("a@b.io", "wrong"));
    assert_eq!(result, Err(AuthError::AuthenticationFailed));
    assert!(!store.is_authenticated());
}

#[test]
fn login_transport_failure_is_also_authentication_failed() {
    let store = SessionStore::new(FakeGateway::new().with_login(Err(ApiError::Transport("down".to_owned()))));
    assert_eq!(block_on(store.login("a@b.io", "pw")), Err(AuthError::AuthenticationFailed));
}

#[test]
fn login_failure_keeps_existing_session() {
    let gateway = FakeGateway::new()
        .with_me(Ok(Some(identity(8, Role::User))))
        .with_login(Err(ApiError::Status { status: 403 }));
    let store = SessionStore::new(gateway);
    block_on(store.restore());

    assert!(block_on(store.login("a@b.io", "pw")).is_err());
    assert_eq!(store.current_identity().map(|i| i.user_id), Some(8));
}

#[test]
fn login_trims_email_but_not_password() {
    let gateway = FakeGateway::new().with_login(Ok(identity(1, Role::User)));
    let store = SessionStore::new(gateway.clone());
    block_on(store.login("  a@b.io ", " pw ")).unwrap();

    let seen = gateway.seen_credentials.lock().unwrap();
    assert_eq!(seen.as_slice(), &[Credentials { email: "a@b.io".to_owned(), password: " pw ".to_owned() }]);
}

// =============================================================
// SessionStore: logout
// =============================================================

#[test]
fn logout_clears_session() {
    let store = SessionStore::new(FakeGateway::new().with_login(Ok(identity(3, Role::Admin))));
    block_on(store.login("a@b.io", "pw")).unwrap();

    block_on(store.logout());
    assert_eq!(store.session(), Session::Absent);
}

#[test]
fn logout_clears_session_even_when_server_call_fails() {
    let gateway = FakeGateway::new()
        .with_login(Ok(identity(3, Role::User)))
        .with_logout(Err(ApiError::Transport("reset".to_owned())));
    let store = SessionStore::new(gateway);
    block_on(store.login("a@b.io", "pw")).unwrap();

    block_on(store.logout());
    assert!(!store.is_authenticated());
}

#[test]
fn logout_twice_is_idempotent() {
    let gateway = FakeGateway::new()
        .with_login(Ok(identity(3, Role::User)))
        .with_logout(Err(ApiError::Status { status: 401 }));
    let store = SessionStore::new(gateway);
    block_on(store.login("a@b.io", "pw")).unwrap();

    block_on(store.logout());
    block_on(store.logout());
    assert_eq!(store.session(), Session::Absent);
}

#[test]
fn session_untracked_matches_tracked_read() {
    let store = SessionStore::new(FakeGateway::new().with_login(Ok(identity(6, Role::User))));
    block_on(store.login("a@b.io", "pw")).unwrap();
    assert_eq!(store.session_untracked(), store.session());
}
