//! Browser-style local storage backed by a single SQLite file.
//!
//! Every key holds one JSON document. Writes replace the whole document,
//! so an interrupted write can lose the latest update but never corrupts
//! what was stored before.

use std::path::Path;

use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::repository;
use super::sqlite::{open_database, open_memory_database};
use super::DatabaseError;

/// Key holding the serialized personal-contacts array.
pub const PERSONAL_CONTACTS_KEY: &str = "personal-contacts";

/// Key holding the serialized auth session (user + authenticated flag).
pub const AUTH_SESSION_KEY: &str = "auth-storage";

pub struct LocalStorage {
    conn: Connection,
}

impl LocalStorage {
    /// Open (or create) the storage file at `path`.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        tracing::debug!(path = %path.display(), "Opening local storage");
        Ok(Self {
            conn: open_database(path)?,
        })
    }

    /// Non-persistent storage, dropped with the value.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        Ok(Self {
            conn: open_memory_database()?,
        })
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        repository::get_item(&self.conn, key)
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        repository::set_item(&self.conn, key, value)
    }

    pub fn remove_item(&self, key: &str) -> Result<(), DatabaseError> {
        repository::remove_item(&self.conn, key)
    }

    pub fn keys(&self) -> Result<Vec<String>, DatabaseError> {
        repository::list_keys(&self.conn)
    }

    /// Read and deserialize the document under `key`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DatabaseError> {
        match self.get_item(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| DatabaseError::MalformedDocument {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Serialize `value` and store it under `key`, replacing any previous document.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), DatabaseError> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    #[test]
    fn save_and_load_document() {
        let storage = LocalStorage::open_in_memory().unwrap();
        let notes = vec![Note { text: "call mum".into() }];
        storage.save("notes", &notes).unwrap();

        let loaded: Vec<Note> = storage.load("notes").unwrap().unwrap();
        assert_eq!(loaded, notes);
    }

    #[test]
    fn load_missing_key_is_none() {
        let storage = LocalStorage::open_in_memory().unwrap();
        let loaded: Option<Vec<Note>> = storage.load("notes").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_malformed_document_reports_key() {
        let storage = LocalStorage::open_in_memory().unwrap();
        storage.set_item("notes", "{not json").unwrap();

        let err = storage.load::<Vec<Note>>("notes").unwrap_err();
        match err {
            DatabaseError::MalformedDocument { key, .. } => assert_eq!(key, "notes"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn documents_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.db");
        {
            let storage = LocalStorage::open(&path).unwrap();
            storage.save("notes", &vec![Note { text: "a".into() }]).unwrap();
        }

        let storage = LocalStorage::open(&path).unwrap();
        let loaded: Vec<Note> = storage.load("notes").unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(storage.keys().unwrap(), vec!["notes".to_string()]);
    }

    #[test]
    fn remove_item_clears_document() {
        let storage = LocalStorage::open_in_memory().unwrap();
        storage.save(AUTH_SESSION_KEY, &true).unwrap();
        storage.remove_item(AUTH_SESSION_KEY).unwrap();
        assert!(storage.get_item(AUTH_SESSION_KEY).unwrap().is_none());
    }
}
