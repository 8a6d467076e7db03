//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteGuard` evaluates this once per navigation; the decision is a pure
//! function of the session snapshot and the route's requirement.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::Session;

/// Where refused navigations land.
pub const LANDING_PATH: &str = "/";

/// What a route demands of the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    #[default]
    Public,
    Authenticated,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(&'static str),
}

/// Decide whether a route may render for `session`.
#[must_use]
pub fn evaluate(session: &Session, access: Access) -> GuardOutcome {
    let allowed = match access {
        Access::Public => true,
        Access::Authenticated => session.is_authenticated(),
        Access::Admin => session.is_admin(),
    };
    if allowed { GuardOutcome::Render } else { GuardOutcome::Redirect(LANDING_PATH) }
}
