//! Shared app contexts: catalog client, session store, and the toast
//! notification collaborator.
//!
//! All three are provided once by the `App` root and reached from
//! components via `use_context` hooks.

use std::time::Duration;

use dioxus::prelude::*;
use faraon_core::{CatalogClient, SessionStore};

/// How long a toast stays on screen before it expires on its own
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Hook to access the catalog API client
pub fn use_catalog() -> Signal<CatalogClient> {
    use_context::<Signal<CatalogClient>>()
}

/// Hook to access the session store (current user, logout)
pub fn use_session() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// A single fire-and-forget notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast store. Fire-and-forget: callers never consume a return value,
/// and each toast removes itself after [`TOAST_TTL`].
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    /// Create the store. Must run inside a component scope (the `App`
    /// root provides it as context).
    pub fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Current toasts, newest last
    pub fn entries(&self) -> Vec<Toast> {
        (self.entries)()
    }

    /// Remove a toast ahead of its expiry (click-to-dismiss)
    pub fn dismiss(&self, id: u64) {
        let mut entries = self.entries;
        entries.write().retain(|t| t.id != id);
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut entries = self.entries;
        let mut next_id = self.next_id;

        let id = next_id();
        next_id.set(id + 1);
        entries.write().push(Toast { id, kind, message });

        spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            entries.write().retain(|t| t.id != id);
        });
    }
}

/// Hook to access the toast store
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}
