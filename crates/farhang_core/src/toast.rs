//! Transient confirmation message.
//!
//! # Invariants
//! - At most one message is shown; a new one replaces the old and restarts
//!   the expiry.

use std::time::{Duration, Instant};

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: Option<(String, Instant)>,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` until `now + TOAST_DURATION`.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some((message.into(), now + TOAST_DURATION));
    }

    /// Message visible at `now`, clearing it once expired.
    pub fn current(&mut self, now: Instant) -> Option<&str> {
        if matches!(&self.message, Some((_, expires_at)) if now >= *expires_at) {
            self.message = None;
        }
        self.message.as_ref().map(|(message, _)| message.as_str())
    }
}
