//! Notifications
//!
//! Toast queue shared through context. Toasts dismiss themselves after a
//! fixed delay and can be closed early.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
            ToastKind::Warning => "toast toast-warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "i",
            ToastKind::Warning => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    duration_ms: u32,
}

impl Notifications {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), Some(description.into()));
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), Some(description.into()));
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Info, title.into(), Some(description.into()));
    }

    pub fn warning(&self, title: impl Into<String>) {
        self.push(ToastKind::Warning, title.into(), None);
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, title: String, description: Option<String>) {
        let mut id = 0;
        self.next_id.update_value(|next| {
            *next += 1;
            id = *next;
        });

        self.toasts.update(|toasts| {
            toasts.push(Toast { id, kind, title, description })
        });

        let toasts = self.toasts;
        Timeout::new(self.duration_ms, move || {
            toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }
}

pub fn use_notifications() -> Notifications {
    expect_context::<Notifications>()
}
