use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use std::path::Path;
use std::sync::Mutex;

use crate::error::StoreError;

use super::SettingsStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS app_settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// Settings table in a local SQLite database.
pub(crate) struct SqliteSettingsStore {
    conn: Mutex<Connection>,
}

impl SqliteSettingsStore {
    pub(crate) fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::from_connection(Connection::open(path)?)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SettingsStore for SqliteSettingsStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let conn = self.lock();
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM app_settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        match raw {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn write(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let conn = self.lock();
        conn.execute(
            "INSERT INTO app_settings (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, text, now],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn read_missing_key_is_none() {
        let store = SqliteSettingsStore::open_in_memory().unwrap();
        assert_eq!(store.read("nothing").unwrap(), None);
    }

    #[test]
    fn write_replaces_whole_value() {
        let store = SqliteSettingsStore::open_in_memory().unwrap();
        store
            .write("k", &json!({"sessions": ["2024-25"], "default": "2024-25"}))
            .unwrap();
        store.write("k", &json!({"sessions": ["2025-26"]})).unwrap();
        assert_eq!(
            store.read("k").unwrap(),
            Some(json!({"sessions": ["2025-26"]}))
        );
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.db");
        {
            let store = SqliteSettingsStore::open(&path).unwrap();
            store.write("k", &json!(["a", "b"])).unwrap();
        }
        let store = SqliteSettingsStore::open(&path).unwrap();
        assert_eq!(store.read("k").unwrap(), Some(json!(["a", "b"])));
    }

    #[test]
    fn corrupt_value_is_an_error() {
        let store = SqliteSettingsStore::open_in_memory().unwrap();
        store
            .lock()
            .execute(
                "INSERT INTO app_settings (key, value, updated_at) VALUES ('k', '{not json', '')",
                [],
            )
            .unwrap();
        assert!(matches!(store.read("k"), Err(StoreError::Json(_))));
    }
}
