//! Content selection pipeline.
//!
//! # Responsibility
//! - Turn the article collection + filter inputs into the ordered feed.
//! - Own incremental reveal: visible count, load-more debounce and the
//!   sentinel observation that triggers it.
//!
//! # Invariants
//! - Every operation here is total over its inputs; there is no error type.
//! - Input order is preserved by every filter step.

pub mod config;
pub mod filter;
pub mod pagination;
pub mod reveal;
pub mod selection;
pub mod sentinel;
