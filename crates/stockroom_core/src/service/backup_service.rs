//! Backup export/import service.

use crate::archive::{
    export_storage, import_storage, BackupArchive, ExportError, ImportError, ImportSummary,
    DEFAULT_EXPORT_KEYS,
};
use crate::storage::{KeyValueStore, StorageKey};
use chrono::Utc;

/// Async facade over the archive codec for one store.
pub struct BackupService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> BackupService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Exports `keys`, stamping the file name with the current UTC time.
    pub async fn export_backup(&self, keys: &[StorageKey]) -> Result<BackupArchive, ExportError> {
        export_storage(&self.store, keys, Utc::now())
    }

    /// Exports every entity collection and both selection pointers.
    pub async fn export_full_backup(&self) -> Result<BackupArchive, ExportError> {
        self.export_backup(&DEFAULT_EXPORT_KEYS).await
    }

    pub async fn import_backup(&self, bytes: &[u8]) -> Result<ImportSummary, ImportError> {
        import_storage(&self.store, bytes)
    }
}
