//! Auto-dismissing toast notifications.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;

/// Identical messages arriving within this window are suppressed, so a
/// double-fired UI event produces one toast instead of two.
pub const TOAST_DEBOUNCE: Duration = Duration::from_millis(500);

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    pub fn expired(&self, now: Instant, duration: Duration) -> bool {
        now.duration_since(self.created_at) >= duration
    }
}

/// Pending notifications, oldest first.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    last_message: Option<(String, Instant)>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a toast unless the same message landed within the debounce
    /// window.
    pub fn push(&mut self, toast: Toast) {
        let now = toast.created_at;
        if let Some((message, at)) = &self.last_message
            && *message == toast.message
            && now.duration_since(*at) < TOAST_DEBOUNCE
        {
            return;
        }
        self.last_message = Some((toast.message.clone(), now));
        self.toasts.push_back(toast);
    }

    /// Removes and returns every pending toast.
    pub fn drain(&mut self) -> Vec<Toast> {
        self.toasts.drain(..).collect()
    }

    /// Drops toasts older than `duration` without surfacing them.
    pub fn expire(&mut self, now: Instant, duration: Duration) {
        self.toasts.retain(|t| !t.expired(now, duration));
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
