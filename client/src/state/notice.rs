//! Transient user-facing notices (toasts).
//!
//! DESIGN
//! ======
//! Every failed or completed user action ends in exactly one notice. The
//! tray renders them and dismisses each after `NOTICE_TTL_MS`.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

/// How long a notice stays on screen.
pub const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Error => "notice--error",
            Self::Info => "notice--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Notices currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Copy handle for raising notices from event handlers and async tasks.
///
/// Obtain it during component setup; context is not reachable after an
/// `.await` inside a spawned task.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    state: RwSignal<NoticeState>,
}

impl Notifier {
    pub fn new(state: RwSignal<NoticeState>) -> Self {
        Self { state }
    }

    /// Queue a notice and schedule its dismissal.
    pub fn notify(self, kind: NoticeKind, message: impl Into<String>) {
        let message = message.into();
        let mut id = 0;
        self.state.update(|s| id = s.push(kind, message));

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
                state.update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }

    pub fn success(self, message: impl Into<String>) {
        self.notify(NoticeKind::Success, message);
    }

    pub fn error(self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, message);
    }

    pub fn info(self, message: impl Into<String>) {
        self.notify(NoticeKind::Info, message);
    }

    pub fn dismiss(self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }

    pub fn state(self) -> RwSignal<NoticeState> {
        self.state
    }
}

/// The notifier provided by `App`. Panics outside the provider.
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}
