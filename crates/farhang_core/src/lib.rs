//! Core domain logic for the Farhang cultural magazine.
//! This crate is the single source of truth for feed state and invariants.

pub mod auth;
pub mod db;
pub mod feed;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod toast;

pub use auth::{IdentityProvider, MockIdentityCycle};
pub use feed::config::FeedConfig;
pub use feed::filter::{FilterState, View};
pub use feed::pagination::{paginate, Page, VisibleCount};
pub use feed::reveal::{LoadMoreScheduler, TriggerOutcome};
pub use feed::selection::{empty_state, select_articles, EmptyState};
pub use feed::sentinel::{LoadMoreBinding, ObserveOutcome, SentinelId, SentinelObserver};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{
    Article, ArticleId, ArticleValidationError, Category, Language, NewArticleData,
};
pub use model::event::{filter_events, Event, EventLocation, EventType};
pub use model::saved::{SavedSet, ToggleOutcome};
pub use model::user::{Author, User};
pub use service::article_service::{publish_article, toggle_saved};
pub use service::feed_session::{AuthNotice, EditorAccess, FeedPage, FeedSession};
pub use store::{KvStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
