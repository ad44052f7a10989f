//! Client-local key-value store.
//!
//! # Responsibility
//! - Define the string key/value contract the feed persists through.
//! - Provide SQLite-backed and in-memory implementations.
//! - Own the JSON encoding of the persisted entries and the fallback policy.
//!
//! # Invariants
//! - Store failures never reach the reader: reads fall back, writes are
//!   logged and dropped (see [`persisted`]).

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod persisted;
pub mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store error.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Connection is not migrated to a schema with the required table.
    MissingRequiredTable(&'static str),
    /// Stored value could not be encoded or decoded.
    Serialization(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::Serialization(err) => write!(f, "invalid stored value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// String key-value store contract.
pub trait KvStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Inserts or replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`. Returns whether an entry existed.
    fn remove(&mut self, key: &str) -> StoreResult<bool>;
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<bool> {
        (**self).remove(key)
    }
}
