//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for SSR; `App` is hydrated in the
//! browser. `App` installs the session store, starts the cookie-backed
//! session restore, and wraps every route in a `RouteGuard` carrying that
//! route's access level.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::route_guard::RouteGuard;
use crate::net::gateway::HttpAuthGateway;
use crate::pages::{admin::AdminPage, home::HomePage, parcels::ParcelsPage, proofs::ProofsPage, unauthorized::UnauthorizedPage};
use crate::state::auth::SessionStore;
use crate::util::guard::Access;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(HttpAuthGateway);
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/shipping.css"/>
        <Title text="The Shipping Service"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RouteGuard><HomePage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("parcel")
                        view=|| view! { <RouteGuard access=Access::Authenticated><ParcelsPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("proofs")
                        view=|| view! { <RouteGuard access=Access::Authenticated><ProofsPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RouteGuard access=Access::Admin><AdminPage/></RouteGuard> }
                    />
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
