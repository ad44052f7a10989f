//! Load-more sentinel observation.
//!
//! # Responsibility
//! - Track the single live observation of the end-of-feed sentinel.
//! - Decide whether a visibility change should trigger load-more.
//!
//! # Invariants
//! - At most one observation is live at a time.
//! - A different sentinel or a different binding tears the old observation
//!   down before the new one is attached.
//! - Re-observing with identical inputs keeps the live observation.

use log::debug;

/// Host-assigned identity of a sentinel element.
pub type SentinelId = u64;

/// Inputs the intersection callback closes over.
///
/// Two bindings are the same callback only when every field matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreBinding {
    pub has_more: bool,
    /// Load-more scheduler generation.
    pub generation: u64,
}

/// Result of one [`SentinelObserver::observe`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveOutcome {
    /// Nothing was live; a new observation was attached.
    Attached,
    /// The previous observation was torn down and replaced.
    Reattached,
    /// Same sentinel and binding; the live observation was kept.
    Unchanged,
    /// No sentinel supplied; the previous observation was torn down.
    Detached,
    /// No sentinel supplied and nothing was live.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Observation {
    sentinel: SentinelId,
    binding: LoadMoreBinding,
}

/// Single-slot visibility watcher for the load-more sentinel.
#[derive(Debug, Default)]
pub struct SentinelObserver {
    active: Option<Observation>,
    attached_total: u64,
}

impl SentinelObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)binds the observer to `sentinel` with the current callback inputs.
    pub fn observe(
        &mut self,
        sentinel: Option<SentinelId>,
        binding: LoadMoreBinding,
    ) -> ObserveOutcome {
        let Some(sentinel) = sentinel else {
            return if self.disconnect() {
                ObserveOutcome::Detached
            } else {
                ObserveOutcome::Idle
            };
        };

        let next = Observation { sentinel, binding };
        if self.active == Some(next) {
            return ObserveOutcome::Unchanged;
        }

        let replaced = self.disconnect();
        self.active = Some(next);
        self.attached_total += 1;
        debug!(
            "event=sentinel_observe module=feed status=attached sentinel={} has_more={} generation={}",
            sentinel, binding.has_more, binding.generation
        );
        if replaced {
            ObserveOutcome::Reattached
        } else {
            ObserveOutcome::Attached
        }
    }

    /// Tears down the live observation. Returns whether one existed.
    pub fn disconnect(&mut self) -> bool {
        match self.active.take() {
            Some(observation) => {
                debug!(
                    "event=sentinel_observe module=feed status=detached sentinel={}",
                    observation.sentinel
                );
                true
            }
            None => false,
        }
    }

    /// Returns whether load-more should run for this visibility report.
    ///
    /// Reports for a sentinel that is not observed are ignored.
    pub fn on_intersection(&self, sentinel: SentinelId, is_intersecting: bool) -> bool {
        match self.active {
            Some(observation) if observation.sentinel == sentinel => {
                is_intersecting && observation.binding.has_more
            }
            _ => false,
        }
    }

    pub fn observed_sentinel(&self) -> Option<SentinelId> {
        self.active.map(|observation| observation.sentinel)
    }

    /// Number of observations attached over this observer's lifetime.
    pub fn attached_total(&self) -> u64 {
        self.attached_total
    }
}
