//! Static notice for accounts lacking the required role.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <section class="unauthorized-page">
            <h1 class="page__title">"Access denied"</h1>
            <p>"You do not have the rights required to view this page."</p>
            <a href="/" class="btn">
                "Back to home"
            </a>
        </section>
    }
}
