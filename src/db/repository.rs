use rusqlite::{params, Connection};

use super::DatabaseError;

/// Get the raw document stored under `key`. Returns None if not set.
pub fn get_item(conn: &Connection, key: &str) -> Result<Option<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT value FROM local_storage WHERE key = ?1")?;
    match stmt.query_row([key], |row| row.get::<_, String>(0)) {
        Ok(val) => Ok(Some(val)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::from(e)),
    }
}

/// Replace the document stored under `key` (upsert).
pub fn set_item(conn: &Connection, key: &str, value: &str) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO local_storage (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

/// Delete the document stored under `key`. Missing keys are not an error.
pub fn remove_item(conn: &Connection, key: &str) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM local_storage WHERE key = ?1", [key])?;
    Ok(())
}

/// List stored keys in alphabetical order.
pub fn list_keys(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT key FROM local_storage ORDER BY key")?;
    let keys = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    #[test]
    fn get_missing_item_returns_none() {
        let conn = open_memory_database().unwrap();
        assert_eq!(get_item(&conn, "personal-contacts").unwrap(), None);
    }

    #[test]
    fn set_then_get_item() {
        let conn = open_memory_database().unwrap();
        set_item(&conn, "auth-storage", r#"{"user":null}"#).unwrap();
        assert_eq!(
            get_item(&conn, "auth-storage").unwrap().as_deref(),
            Some(r#"{"user":null}"#)
        );
    }

    #[test]
    fn set_item_replaces_whole_document() {
        let conn = open_memory_database().unwrap();
        set_item(&conn, "k", "[1,2,3]").unwrap();
        set_item(&conn, "k", "[4]").unwrap();
        assert_eq!(get_item(&conn, "k").unwrap().as_deref(), Some("[4]"));
        assert_eq!(list_keys(&conn).unwrap(), vec!["k".to_string()]);
    }

    #[test]
    fn remove_item_is_idempotent() {
        let conn = open_memory_database().unwrap();
        set_item(&conn, "k", "v").unwrap();
        remove_item(&conn, "k").unwrap();
        remove_item(&conn, "k").unwrap();
        assert_eq!(get_item(&conn, "k").unwrap(), None);
    }

    #[test]
    fn list_keys_sorted() {
        let conn = open_memory_database().unwrap();
        set_item(&conn, "personal-contacts", "[]").unwrap();
        set_item(&conn, "auth-storage", "{}").unwrap();
        assert_eq!(
            list_keys(&conn).unwrap(),
            vec!["auth-storage".to_string(), "personal-contacts".to_string()]
        );
    }
}
