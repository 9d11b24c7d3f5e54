//! SQLite-backed key-value store
//!
//! A single `local_storage` table holds serialized values by key, so the
//! device list can sit next to any other small piece of persisted state.

use super::{decode_or_empty, encode_devices, DeviceStore};
use crate::core::{Error, NormalizedDevice, Result, APP_DIR_NAME};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// Database manager
pub struct Database {
    conn: Connection,
    storage_key: String,
}

impl Database {
    /// Open the database at the default location
    pub fn new(storage_key: &str) -> Result<Self> {
        Self::open(&Self::db_path()?, storage_key)
    }

    /// Open (or create) the database at `path`
    pub fn open(path: &Path, storage_key: &str) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        log::info!("Opened device store at {}", path.display());
        Self::with_connection(conn, storage_key)
    }

    /// Database that lives only as long as this value
    pub fn open_in_memory(storage_key: &str) -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?, storage_key)
    }

    fn with_connection(conn: Connection, storage_key: &str) -> Result<Self> {
        let db = Self {
            conn,
            storage_key: storage_key.to_string(),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get the database file path
    fn db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))?;

        Ok(data_dir.join(APP_DIR_NAME).join("data.db"))
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    /// Read a raw value
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Insert or replace a raw value
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        self.conn.execute(
            r#"INSERT INTO local_storage (key, value, updated_at)
               VALUES (?1, ?2, ?3)
               ON CONFLICT(key) DO UPDATE SET
                   value = ?2,
                   updated_at = ?3"#,
            params![key, value, now],
        )?;

        Ok(())
    }

    /// Unix timestamp of the last device list save
    pub fn last_saved_at(&self) -> Result<Option<i64>> {
        let updated_at = self
            .conn
            .query_row(
                "SELECT updated_at FROM local_storage WHERE key = ?1",
                params![self.storage_key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(updated_at)
    }
}

impl DeviceStore for Database {
    fn load(&self) -> Result<Vec<NormalizedDevice>> {
        let raw = self.get_item(&self.storage_key)?;
        Ok(decode_or_empty(raw.as_deref()))
    }

    fn save(&mut self, devices: &[NormalizedDevice]) -> Result<()> {
        let raw = encode_devices(devices)?;
        self.set_item(&self.storage_key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_db() -> Database {
        Database::open_in_memory("energyDevices").unwrap()
    }

    #[test]
    fn test_empty_database_loads_empty() {
        let db = create_test_db();
        assert!(db.load().unwrap().is_empty());
        assert_eq!(db.last_saved_at().unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let mut db = create_test_db();
        let devices = vec![
            NormalizedDevice::new("TV", 60.0, 4.0),
            NormalizedDevice::new("Ayd\u{0131}nlatma (Ampul)", 18.0, 5.0),
        ];

        db.save(&devices).unwrap();
        assert_eq!(db.load().unwrap(), devices);
        assert!(db.last_saved_at().unwrap().is_some());

        db.save(&devices[..1]).unwrap();
        assert_eq!(db.load().unwrap(), devices[..1].to_vec());
    }

    #[test]
    fn test_corrupt_value_loads_empty() {
        let db = create_test_db();
        db.set_item("energyDevices", "{{{").unwrap();
        assert!(db.load().unwrap().is_empty());
    }

    #[test]
    fn test_keys_are_independent() {
        let mut db = create_test_db();
        db.set_item("theme", "dark").unwrap();
        db.save(&[NormalizedDevice::new("TV", 60.0, 4.0)]).unwrap();

        assert_eq!(db.get_item("theme").unwrap().as_deref(), Some("dark"));
        db.set_item("theme", "light").unwrap();
        assert_eq!(db.get_item("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(db.load().unwrap().len(), 1);
    }

    #[test]
    fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("data.db");

        {
            let mut db = Database::open(&path, "energyDevices").unwrap();
            db.save(&[NormalizedDevice::new("Klima", 17.0, 24.0)]).unwrap();
        }

        let db = Database::open(&path, "energyDevices").unwrap();
        assert_eq!(db.load().unwrap(), vec![NormalizedDevice::new("Klima", 17.0, 24.0)]);
    }
}
