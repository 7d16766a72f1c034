//! redb-based persistence for saved arrangements
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `arrangements` | `wedding_id` | `SavedArrangement` (JSON) | Last saved arrangement per wedding |
//!
//! Values use the persisted-document JSON shape (`savedGuestList`,
//! `savedTables`, ...) so stored data stays readable by other clients.

use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use shared::seating::SavedArrangement;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// key = wedding_id, value = JSON-serialized SavedArrangement
const ARRANGEMENTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("arrangements");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Where saved arrangements live
///
/// The engine only needs whole-document load and save; the remote wedding
/// API and browser storage are other implementations of the same contract.
pub trait ArrangementRepository {
    fn load(&self, wedding_id: &str) -> StorageResult<Option<SavedArrangement>>;
    fn save(&self, wedding_id: &str, arrangement: &SavedArrangement) -> StorageResult<()>;
    /// Returns whether a document was removed
    fn delete(&self, wedding_id: &str) -> StorageResult<bool>;
    /// Stored wedding ids, ascending
    fn list(&self) -> StorageResult<Vec<String>>;
}

/// Arrangement storage backed by redb
#[derive(Clone)]
pub struct ArrangementStorage {
    db: Arc<Database>,
}

impl ArrangementStorage {
    /// Open or create the database at the given path
    ///
    /// redb commits with `Durability::Immediate` by default: a save is on
    /// disk once `commit()` returns.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// In-memory database, for tests and dry runs
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ARRANGEMENTS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Number of stored arrangements
    pub fn count(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ARRANGEMENTS_TABLE)?;
        Ok(table.len()?)
    }
}

impl ArrangementRepository for ArrangementStorage {
    fn load(&self, wedding_id: &str) -> StorageResult<Option<SavedArrangement>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ARRANGEMENTS_TABLE)?;

        match table.get(wedding_id)? {
            Some(value) => {
                let saved: SavedArrangement = serde_json::from_slice(value.value())?;
                Ok(Some(saved))
            }
            None => Ok(None),
        }
    }

    fn save(&self, wedding_id: &str, arrangement: &SavedArrangement) -> StorageResult<()> {
        let value = serde_json::to_vec(arrangement)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ARRANGEMENTS_TABLE)?;
            table.insert(wedding_id, value.as_slice())?;
        }
        txn.commit()?;
        tracing::debug!(wedding_id, bytes = value.len(), "Arrangement saved");
        Ok(())
    }

    fn delete(&self, wedding_id: &str) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(ARRANGEMENTS_TABLE)?;
            table.remove(wedding_id)?.is_some()
        };
        txn.commit()?;
        Ok(removed)
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ARRANGEMENTS_TABLE)?;

        let mut ids = Vec::new();
        for result in table.iter()? {
            let (key, _value) = result?;
            ids.push(key.value().to_string());
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Guest;
    use std::collections::HashMap;

    fn saved() -> SavedArrangement {
        SavedArrangement {
            saved_guest_list: vec![Guest::primary("1", "Jane", "Smith", "Family")],
            saved_tables: vec![vec![Guest::primary("2", "Bo", "Lee", "")], vec![]],
            saved_table_aliases: HashMap::from([("0".to_string(), "Head".to_string())]),
            saved_table_sizes: HashMap::from([("1".to_string(), 6)]),
            saved_table_numbers: HashMap::new(),
        }
    }

    #[test]
    fn test_save_and_load() {
        let storage = ArrangementStorage::open_in_memory().unwrap();
        assert!(storage.load("w1").unwrap().is_none());

        storage.save("w1", &saved()).unwrap();
        assert_eq!(storage.load("w1").unwrap(), Some(saved()));
        assert_eq!(storage.count().unwrap(), 1);
    }

    #[test]
    fn test_save_overwrites() {
        let storage = ArrangementStorage::open_in_memory().unwrap();
        storage.save("w1", &saved()).unwrap();
        storage.save("w1", &SavedArrangement::default()).unwrap();
        assert_eq!(storage.load("w1").unwrap(), Some(SavedArrangement::default()));
        assert_eq!(storage.count().unwrap(), 1);
    }

    #[test]
    fn test_list_and_delete() {
        let storage = ArrangementStorage::open_in_memory().unwrap();
        storage.save("beta", &saved()).unwrap();
        storage.save("alpha", &saved()).unwrap();
        assert_eq!(storage.list().unwrap(), vec!["alpha", "beta"]);

        assert!(storage.delete("alpha").unwrap());
        assert!(!storage.delete("alpha").unwrap());
        assert_eq!(storage.list().unwrap(), vec!["beta"]);
    }

    #[test]
    fn test_reopen_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seating.redb");
        {
            let storage = ArrangementStorage::open(&path).unwrap();
            storage.save("w1", &saved()).unwrap();
        }
        let storage = ArrangementStorage::open(&path).unwrap();
        assert_eq!(storage.load("w1").unwrap(), Some(saved()));
    }
}
