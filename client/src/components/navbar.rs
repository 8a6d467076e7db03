//! Top navigation bar with session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the routed pages. Links to gated pages stay
//! visible while signed out; following one shows a short notice instead of
//! navigating. The administration link only appears for admins.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::login_form::LoginForm;
use crate::components::notice_banner::NoticeBanner;
use crate::state::auth::use_session;
use crate::util::notice::{Notice, flash};

/// Site header: brand, page links, and sign in / sign out.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let show_login = RwSignal::new(false);
    let menu_open = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let link_class = move |path: &'static str| {
        move || {
            if location.pathname.get() == path {
                "navbar__link navbar__link--active"
            } else {
                "navbar__link"
            }
        }
    };

    let on_gated_click = move |ev: leptos::ev::MouseEvent| {
        menu_open.set(false);
        if !session.is_authenticated() {
            ev.prevent_default();
            flash(notice, Notice::info("Sign in to open this page."));
        }
    };

    let on_logout = move |_| {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(session.logout());
    };

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">
                "The Shipping Service"
            </a>
            <button
                class="navbar__toggle"
                title="Menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <nav class=move || if menu_open.get() { "navbar__links navbar__links--open" } else { "navbar__links" }>
                <a href="/" class=link_class("/") on:click=move |_| menu_open.set(false)>
                    "Home"
                </a>
                <a href="/parcel" class=link_class("/parcel") on:click=on_gated_click>
                    "Parcels"
                </a>
                <a href="/proofs" class=link_class("/proofs") on:click=on_gated_click>
                    "Proofs"
                </a>
                <Show when=move || session.is_admin()>
                    <a href="/admin" class=link_class("/admin") on:click=move |_| menu_open.set(false)>
                        "Admin"
                    </a>
                </Show>
            </nav>

            <span class="navbar__spacer"></span>

            <Show
                when=move || session.is_authenticated()
                fallback=move || {
                    view! {
                        <button
                            class="btn btn--primary"
                            disabled=move || session.is_restoring()
                            on:click=move |_| show_login.set(true)
                        >
                            "Sign in"
                        </button>
                    }
                }
            >
                <span class="navbar__self">
                    {move || session.current_identity().map(|identity| identity.name).unwrap_or_default()}
                </span>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </Show>
        </header>

        <NoticeBanner notice=notice/>

        <Show when=move || show_login.get()>
            <LoginForm on_close=Callback::new(move |()| show_login.set(false))/>
        </Show>
    }
}
