//! Transient notification queue.
//!
//! Page shells raise toasts (`{title, description, variant, duration}`); the
//! shell renders the newest first and drops each one when its duration runs
//! out or the user dismisses it.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most toasts kept on screen at once; older ones are dropped.
pub const MAX_TOASTS: usize = 6;

/// Lifetime used when a request does not specify one.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ToastVariant::Info => "toast--info",
            ToastVariant::Success => "toast--success",
            ToastVariant::Warning => "toast--warning",
            ToastVariant::Error => "toast--error",
        }
    }
}

/// Monotonic toast identifier, unique within one queue.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ToastId(u64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// What a caller asks to show.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: ToastVariant,
    /// `None` uses [`DEFAULT_TOAST_DURATION`]; zero means "until dismissed".
    pub duration: Option<Duration>,
}

impl ToastRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// A toast currently in the queue.
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: ToastId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub duration: Duration,
    /// `None` for sticky toasts.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Newest-first list of live toasts.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a toast created at `now`. Returns its id.
    pub fn notify_at(&mut self, request: ToastRequest, now: DateTime<Utc>) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let duration = request.duration.unwrap_or(DEFAULT_TOAST_DURATION);
        let expires_at = if duration.is_zero() {
            None
        } else {
            chrono::Duration::from_std(duration).ok().map(|d| now + d)
        };

        self.items.insert(
            0,
            Toast {
                id,
                title: request.title,
                description: request.description,
                variant: request.variant,
                duration,
                expires_at,
            },
        );
        self.items.truncate(MAX_TOASTS);
        tracing::debug!(%id, variant = ?request.variant, "toast queued");
        id
    }

    pub fn notify(&mut self, request: ToastRequest) -> ToastId {
        self.notify_at(request, Utc::now())
    }

    /// Remove one toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Drop every toast whose deadline is at or before `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items
            .retain(|t| t.expires_at.map_or(true, |deadline| deadline > now));
        before - self.items.len()
    }

    /// Whether [`ToastQueue::expire`] at `now` would remove anything.
    pub fn has_due(&self, now: DateTime<Utc>) -> bool {
        self.items
            .iter()
            .any(|t| t.expires_at.is_some_and(|deadline| deadline <= now))
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
