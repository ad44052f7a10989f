//! Domain model for the magazine feed.
//!
//! # Responsibility
//! - Define canonical records for articles, events and identities.
//! - Keep serde wire names compatible with the persisted JSON collection.
//!
//! # Invariants
//! - Articles and events are identified by stable numeric ids.

pub mod article;
pub mod event;
pub mod saved;
pub mod user;
