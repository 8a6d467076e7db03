//! Previous/next pagination control for the management tables.

use leptos::prelude::*;

use crate::util::listing::{PAGE_SIZE, clamp_page, page_count};

/// `page` is 1-based; `total` is the number of rows after filtering.
#[component]
pub fn Pager(page: RwSignal<usize>, #[prop(into)] total: Signal<usize>) -> impl IntoView {
    let pages = move || page_count(total.get(), PAGE_SIZE);
    let current = move || clamp_page(page.get(), total.get(), PAGE_SIZE);

    view! {
        <div class="pager">
            <button
                class="btn"
                disabled=move || current() <= 1
                on:click=move |_| page.set(current().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pager__label">{move || format!("Page {} of {}", current(), pages())}</span>
            <button
                class="btn"
                disabled=move || current() >= pages()
                on:click=move |_| page.set(current() + 1)
            >
                "Next"
            </button>
        </div>
    }
}
