//! Debounced load-more timer.
//!
//! # Responsibility
//! - Turn bursts of load-more triggers into one delayed reveal.
//! - Drop a pending reveal when the feed is reset.
//!
//! # Invariants
//! - At most one pending reveal exists per generation.
//! - `cancel` starts a new generation; nothing scheduled before it can fire.
//! - Time is supplied by the caller, so behavior is deterministic.

use std::time::{Duration, Instant};

/// Outcome of one load-more trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A reveal is now pending and will be due at the given instant.
    Scheduled(Instant),
    /// A reveal was already pending in this generation.
    Coalesced,
}

#[derive(Debug, Clone, Copy)]
struct PendingReveal {
    due_at: Instant,
    generation: u64,
}

/// Cancellable single-slot delay timer for load-more.
#[derive(Debug, Clone)]
pub struct LoadMoreScheduler {
    delay: Duration,
    generation: u64,
    pending: Option<PendingReveal>,
}

impl LoadMoreScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Current generation. Changes on every [`cancel`](Self::cancel).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending reveal becomes due.
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due_at)
    }

    /// Schedules one reveal `delay` after `now` unless one is already pending.
    pub fn trigger(&mut self, now: Instant) -> TriggerOutcome {
        if let Some(pending) = self.pending {
            if pending.generation == self.generation {
                return TriggerOutcome::Coalesced;
            }
        }
        let due_at = now + self.delay;
        self.pending = Some(PendingReveal {
            due_at,
            generation: self.generation,
        });
        TriggerOutcome::Scheduled(due_at)
    }

    /// Drops any pending reveal and starts a new generation.
    ///
    /// Returns whether a pending reveal was dropped.
    pub fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.pending.take().is_some()
    }

    /// Consumes the pending reveal when it is due at `now`.
    ///
    /// Returns `true` exactly once per scheduled reveal.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if pending.generation != self.generation => {
                self.pending = None;
                false
            }
            Some(pending) if now >= pending.due_at => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
