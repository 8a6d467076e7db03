//! Transient status messages shown above forms and tables.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

/// How long a flashed notice stays visible.
pub const NOTICE_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Stamp assigned by [`flash`]; zero for notices set directly.
    pub seq: u64,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into(), seq: 0 }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into(), seq: 0 }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into(), seq: 0 }
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Info => "notice notice--info",
        }
    }
}

static FLASH_SEQ: AtomicU64 = AtomicU64::new(1);

/// Show `notice` and clear it after [`NOTICE_MS`], unless another flash
/// replaced it in the meantime. Returns the stamp the timer clears on.
pub fn flash(slot: RwSignal<Option<Notice>>, mut notice: Notice) -> u64 {
    let seq = FLASH_SEQ.fetch_add(1, Ordering::Relaxed);
    notice.seq = seq;
    slot.try_set(Some(notice));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
        slot.try_update(|current| expire(current, seq));
    });
    seq
}

/// Clear `current` if it is still the notice stamped `seq`.
pub fn expire(current: &mut Option<Notice>, seq: u64) {
    if current.as_ref().is_some_and(|n| n.seq == seq) {
        *current = None;
    }
}
