//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, feed pipeline and store into use-case level APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod article_service;
pub mod feed_session;
