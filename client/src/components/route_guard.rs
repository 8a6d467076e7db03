//! Access gate wrapped around every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps each route view in a `RouteGuard` with that route's
//! [`Access`] requirement. The guard reads the session once, untracked, when
//! the route is entered: a later logout does not evict a page that is already
//! showing, and the next navigation is judged again.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::use_session;
use crate::util::guard::{Access, GuardOutcome, evaluate};

/// Render `children` when the session satisfies `access`, otherwise replace
/// the current history entry with the landing page.
#[component]
pub fn RouteGuard(#[prop(optional)] access: Access, children: Children) -> impl IntoView {
    let session = use_session();
    match evaluate(&session.session_untracked(), access) {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Redirect(path) => {
            log::info!("[guard] {access:?} route refused; redirecting to {path}");
            view! {
                <Redirect
                    path=path
                    options=NavigateOptions { replace: true, ..NavigateOptions::default() }
                />
            }
            .into_any()
        }
    }
}
