//! Feed tuning knobs.

use std::time::Duration;

/// Initial number of revealed articles.
pub const DEFAULT_INITIAL_VISIBLE: usize = 12;
/// Articles added by one load-more.
pub const DEFAULT_LOAD_MORE_STEP: usize = 8;
/// Delay between a load-more trigger and the reveal.
pub const DEFAULT_LOAD_MORE_DELAY: Duration = Duration::from_millis(300);

/// Incremental reveal configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    pub initial_visible: usize,
    pub load_more_step: usize,
    pub load_more_delay: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            initial_visible: DEFAULT_INITIAL_VISIBLE,
            load_more_step: DEFAULT_LOAD_MORE_STEP,
            load_more_delay: DEFAULT_LOAD_MORE_DELAY,
        }
    }
}
