//! Persisted feed entries and their fallback policy.
//!
//! # Responsibility
//! - Encode the article collection and bookmarks as JSON under fixed keys.
//! - Fall back to defaults on any read/parse failure.
//!
//! # Invariants
//! - Load functions never fail; they log and return a default.
//! - Save functions never fail; they log and report `false`.

use super::{KvStore, StoreResult};
use crate::model::article::Article;
use crate::model::saved::SavedSet;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key of the JSON-encoded article collection.
pub const ARTICLES_KEY: &str = "cultural-articles";
/// Key of the JSON-encoded bookmark id array.
pub const SAVED_ARTICLES_KEY: &str = "savedArticles";

/// Loads the article collection, or `fallback()` when absent or unreadable.
pub fn load_articles<S, F>(store: &S, fallback: F) -> Vec<Article>
where
    S: KvStore + ?Sized,
    F: FnOnce() -> Vec<Article>,
{
    read_entry(store, ARTICLES_KEY).unwrap_or_else(fallback)
}

/// Persists the full article collection.
pub fn save_articles<S: KvStore + ?Sized>(store: &mut S, articles: &[Article]) -> bool {
    write_entry(store, ARTICLES_KEY, articles)
}

/// Loads bookmarks, or an empty set when absent or unreadable.
pub fn load_saved_ids<S: KvStore + ?Sized>(store: &S) -> SavedSet {
    read_entry(store, SAVED_ARTICLES_KEY).unwrap_or_default()
}

/// Persists bookmarks as a JSON array of ids.
pub fn save_saved_ids<S: KvStore + ?Sized>(store: &mut S, saved: &SavedSet) -> bool {
    write_entry(store, SAVED_ARTICLES_KEY, saved)
}

fn read_entry<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("event=store_read module=store status=skip key={key} reason=absent");
            return None;
        }
        Err(err) => {
            error!(
                "event=store_read module=store status=error key={key} error_code=store_read_failed error={err}"
            );
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            debug!("event=store_read module=store status=ok key={key}");
            Some(value)
        }
        Err(err) => {
            warn!(
                "event=store_read module=store status=error key={key} error_code=store_parse_failed error={err}"
            );
            None
        }
    }
}

fn write_entry<S, T>(store: &mut S, key: &str, value: &T) -> bool
where
    S: KvStore + ?Sized,
    T: Serialize + ?Sized,
{
    match encode_and_set(store, key, value) {
        Ok(()) => {
            debug!("event=store_write module=store status=ok key={key}");
            true
        }
        Err(err) => {
            error!(
                "event=store_write module=store status=error key={key} error_code=store_write_failed error={err}"
            );
            false
        }
    }
}

fn encode_and_set<S, T>(store: &mut S, key: &str, value: &T) -> StoreResult<()>
where
    S: KvStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
