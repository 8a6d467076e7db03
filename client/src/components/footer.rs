//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"The Shipping Service"</span>
            <span class="footer__links">
                <a href="/">"Send"</a>
                <a href="/#track">"Track"</a>
            </span>
        </footer>
    }
}
