use farhang_core::db::migrations::latest_version;
use farhang_core::db::{open_db, DbError};
use farhang_core::fixtures::mock_articles;
use farhang_core::store::persisted::{
    load_articles, load_saved_ids, save_articles, save_saved_ids, ARTICLES_KEY,
    SAVED_ARTICLES_KEY,
};
use farhang_core::{KvStore, MemoryKvStore, SavedSet, SqliteKvStore, StoreError, StoreResult};
use rusqlite::Connection;

/// Store whose every operation fails, to exercise the fallback policy.
struct BrokenStore;

impl KvStore for BrokenStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::MissingRequiredTable("kv_entries"))
    }

    fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::MissingRequiredTable("kv_entries"))
    }

    fn remove(&mut self, _key: &str) -> StoreResult<bool> {
        Err(StoreError::MissingRequiredTable("kv_entries"))
    }
}

#[test]
fn sqlite_store_upserts_and_removes() {
    let mut store = SqliteKvStore::open_in_memory().unwrap();

    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    assert!(store.remove("k").unwrap());
    assert!(!store.remove("k").unwrap());
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("farhang.sqlite3");

    {
        let mut store = SqliteKvStore::open(&path).unwrap();
        save_saved_ids(&mut store, &[4, 9].into_iter().collect());
    }

    let store = SqliteKvStore::open(&path).unwrap();
    let saved = load_saved_ids(&store);
    assert!(saved.contains(4));
    assert!(saved.contains(9));
}

#[test]
fn sqlite_store_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteKvStore::try_new(conn).err().unwrap();
    assert!(matches!(err, StoreError::MissingRequiredTable("kv_entries")));
}

#[test]
fn open_db_applies_migrations_and_rejects_newer_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.sqlite3");

    let conn = open_db(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    drop(conn);

    let future = dir.path().join("future.sqlite3");
    let conn = Connection::open(&future).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&future).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_entries_fall_back_to_defaults() {
    let store = MemoryKvStore::new();
    assert_eq!(load_articles(&store, mock_articles), mock_articles());
    assert!(load_saved_ids(&store).is_empty());
}

#[test]
fn corrupt_entries_fall_back_to_defaults() {
    let mut store = MemoryKvStore::new();
    store.set(ARTICLES_KEY, "{not json").unwrap();
    store.set(SAVED_ARTICLES_KEY, "[\"a\"]").unwrap();

    assert_eq!(load_articles(&store, Vec::new), Vec::new());
    assert_eq!(load_saved_ids(&store), SavedSet::new());
}

#[test]
fn read_and_write_failures_are_swallowed() {
    let mut store = BrokenStore;
    assert_eq!(load_articles(&store, mock_articles).len(), mock_articles().len());
    assert!(load_saved_ids(&store).is_empty());
    assert!(!save_articles(&mut store, &mock_articles()));
    assert!(!save_saved_ids(&mut store, &SavedSet::new()));
}

#[test]
fn articles_without_tags_field_still_load() {
    let mut store = MemoryKvStore::new();
    store
        .set(
            ARTICLES_KEY,
            r#"[{"id":1,"title":"t","excerpt":"e","content":"c","imageUrl":"i","imageHeight":300,
                 "category":"Local Culture","date":"2024-01-01","views":"۱","likes":"۲",
                 "language":"fa","authorId":2}]"#,
        )
        .unwrap();

    let articles = load_articles(&store, Vec::new);
    assert_eq!(articles.len(), 1);
    assert!(articles[0].tags.is_empty());
    assert_eq!(articles[0].author_id, 2);
}
