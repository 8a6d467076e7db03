//! Inline banner for a transient [`Notice`].

#[cfg(test)]
#[path = "notice_banner_test.rs"]
mod notice_banner_test;

use leptos::prelude::*;

use crate::util::notice::Notice;

#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = n.css_class();
            view! {
                <p class=class role="status">
                    {n.text}
                </p>
            }
        })
    }
}
