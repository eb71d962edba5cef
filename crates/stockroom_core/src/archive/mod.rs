//! Backup archive export/import.
//!
//! # Responsibility
//! - Bundle a caller-chosen, ordered subset of store slots into one gzip
//!   container whose single named entry is a JSON document.
//! - Restore slots from such a container.
//!
//! # Invariants
//! - The document maps slot names to slot values; every name must be a
//!   known `StorageKey` and every value must match that slot's shape.
//! - Import validates the whole document before the first write.
//! - Writes are not atomic across slots: a store failure at slot N leaves
//!   slots written before N in place.

use crate::model::company::Company;
use crate::model::department::Department;
use crate::model::inventory::InventoryRecord;
use crate::model::item::Item;
use crate::model::unit::Unit;
use crate::model::EntityId;
use crate::storage::{KeyValueStore, StorageKey, StoreError};
use chrono::{DateTime, SecondsFormat, Utc};
use flate2::read::GzDecoder;
use flate2::{Compression, GzBuilder};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{Read, Write};
use std::time::Instant;

/// Name of the JSON entry inside every backup container.
pub const BACKUP_ENTRY_NAME: &str = "localStorageBackup.json";
pub const BACKUP_FILE_PREFIX: &str = "inventory-backup-";
pub const BACKUP_FILE_EXTENSION: &str = ".json.gz";

/// Slots exported by a full backup.
pub const DEFAULT_EXPORT_KEYS: [StorageKey; 7] = [
    StorageKey::Companies,
    StorageKey::Departments,
    StorageKey::Inventory,
    StorageKey::Items,
    StorageKey::Units,
    StorageKey::ActiveCompany,
    StorageKey::ActiveDepartment,
];

/// Export output: suggested file name plus container bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Slots written by a successful import, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub restored_keys: Vec<StorageKey>,
}

#[derive(Debug)]
pub enum ExportError {
    Store(StoreError),
    Serialize(serde_json::Error),
    Archive(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode backup document: {err}"),
            Self::Archive(err) => write!(f, "failed to write backup archive: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Archive(err) => Some(err),
        }
    }
}

impl From<StoreError> for ExportError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Import failure. All variants except `Store` are raised before any slot
/// is written.
#[derive(Debug)]
pub enum ImportError {
    /// Input is not a readable gzip container.
    Archive(std::io::Error),
    /// Container does not carry the expected entry name.
    MissingEntry {
        expected: &'static str,
        found: Option<String>,
    },
    /// Entry content is not a valid backup document.
    InvalidDocument(String),
    /// Store failed while writing `key`; earlier slots stay written.
    Store { key: StorageKey, source: StoreError },
}

impl ImportError {
    /// Whether the failure happened before any slot was written.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::Store { .. })
    }
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Archive(err) => write!(f, "cannot open backup archive: {err}"),
            Self::MissingEntry { expected, found } => match found {
                Some(found) => write!(f, "backup entry `{expected}` missing, found `{found}`"),
                None => write!(f, "backup entry `{expected}` missing"),
            },
            Self::InvalidDocument(message) => write!(f, "invalid backup document: {message}"),
            Self::Store { key, source } => write!(f, "failed to restore `{key}`: {source}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Archive(err) => Some(err),
            Self::Store { source, .. } => Some(source),
            Self::MissingEntry { .. } | Self::InvalidDocument(_) => None,
        }
    }
}

/// Builds the archive file name for an export taken at `at`.
///
/// `inventory-backup-2026-10-19T08-30-00-000Z.json.gz`
pub fn backup_file_name(at: DateTime<Utc>) -> String {
    let stamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{BACKUP_FILE_PREFIX}{stamp}{BACKUP_FILE_EXTENSION}")
}

/// Exports `keys` (in order, skipping empty slots) into one archive.
///
/// Slots whose text is not valid JSON or does not match the slot's shape
/// are left out with a `warn` event, so every archive produced here
/// imports cleanly.
pub fn export_storage<S>(
    store: &S,
    keys: &[StorageKey],
    exported_at: DateTime<Utc>,
) -> Result<BackupArchive, ExportError>
where
    S: KeyValueStore + ?Sized,
{
    let started_at = Instant::now();
    let mut document = Map::new();
    for key in keys {
        let Some(raw) = store.get_raw(*key)? else {
            continue;
        };
        // Serde messages can quote slot content, so only the stage is logged.
        let checked = serde_json::from_str::<Value>(&raw)
            .map_err(|_| "not_json")
            .and_then(|value| {
                check_slot_shape(*key, &value)
                    .map(|()| value)
                    .map_err(|_| "shape_mismatch")
            });
        match checked {
            Ok(value) => {
                document.insert(key.as_str().to_string(), value);
            }
            Err(reason) => warn!(
                "event=archive_export_skip module=archive status=error key={} bytes={} reason={}",
                key,
                raw.len(),
                reason
            ),
        }
    }

    let key_count = document.len();
    let json =
        serde_json::to_vec_pretty(&Value::Object(document)).map_err(ExportError::Serialize)?;
    let bytes = compress_entry(&json, exported_at).map_err(ExportError::Archive)?;
    let archive = BackupArchive {
        file_name: backup_file_name(exported_at),
        bytes,
    };

    info!(
        "event=archive_export module=archive status=ok keys={} bytes={} duration_ms={}",
        key_count,
        archive.bytes.len(),
        started_at.elapsed().as_millis()
    );
    Ok(archive)
}

/// Restores every slot present in the archive, overwriting current values.
pub fn import_storage<S>(store: &S, bytes: &[u8]) -> Result<ImportSummary, ImportError>
where
    S: KeyValueStore + ?Sized,
{
    let started_at = Instant::now();
    let entries = match decode_archive(bytes) {
        Ok(entries) => entries,
        Err(err) => {
            error!(
                "event=archive_import module=archive status=error stage=decode error={}",
                err
            );
            return Err(err);
        }
    };

    let mut summary = ImportSummary::default();
    for (key, value) in entries {
        let raw = value.to_string();
        if let Err(source) = store.set_raw(key, &raw) {
            error!(
                "event=archive_import module=archive status=error stage=write key={} restored={} error={}",
                key,
                summary.restored_keys.len(),
                source
            );
            return Err(ImportError::Store { key, source });
        }
        summary.restored_keys.push(key);
    }

    info!(
        "event=archive_import module=archive status=ok keys={} duration_ms={}",
        summary.restored_keys.len(),
        started_at.elapsed().as_millis()
    );
    Ok(summary)
}

/// Opens an archive and validates its document without touching a store.
pub fn decode_archive(bytes: &[u8]) -> Result<Vec<(StorageKey, Value)>, ImportError> {
    let mut decoder = GzDecoder::new(bytes);
    let mut json = Vec::new();
    decoder
        .read_to_end(&mut json)
        .map_err(ImportError::Archive)?;

    let entry_name = decoder
        .header()
        .and_then(|header| header.filename())
        .map(|name| String::from_utf8_lossy(name).into_owned());
    if entry_name.as_deref() != Some(BACKUP_ENTRY_NAME) {
        return Err(ImportError::MissingEntry {
            expected: BACKUP_ENTRY_NAME,
            found: entry_name,
        });
    }

    let document: Value = serde_json::from_slice(&json)
        .map_err(|err| ImportError::InvalidDocument(format!("not JSON: {err}")))?;
    let Value::Object(document) = document else {
        return Err(ImportError::InvalidDocument(
            "top-level value must be an object".to_string(),
        ));
    };

    document
        .into_iter()
        .map(|(name, value)| {
            let key = name
                .parse::<StorageKey>()
                .map_err(|err| ImportError::InvalidDocument(err.to_string()))?;
            check_slot_shape(key, &value)?;
            Ok((key, value))
        })
        .collect()
}

fn compress_entry(json: &[u8], exported_at: DateTime<Utc>) -> std::io::Result<Vec<u8>> {
    let mtime = u32::try_from(exported_at.timestamp()).unwrap_or(0);
    let mut encoder = GzBuilder::new()
        .filename(BACKUP_ENTRY_NAME)
        .mtime(mtime)
        .write(Vec::new(), Compression::default());
    encoder.write_all(json)?;
    encoder.finish()
}

fn check_slot_shape(key: StorageKey, value: &Value) -> Result<(), ImportError> {
    match key {
        StorageKey::Companies => check_as::<Vec<Company>>(key, value),
        StorageKey::Departments => check_as::<Vec<Department>>(key, value),
        StorageKey::Units => check_as::<Vec<Unit>>(key, value),
        StorageKey::Items => check_as::<Vec<Item>>(key, value),
        StorageKey::Inventory => check_as::<Vec<InventoryRecord>>(key, value),
        StorageKey::ActiveCompany | StorageKey::ActiveDepartment => {
            check_as::<Option<EntityId>>(key, value)
        }
        StorageKey::Language => check_as::<String>(key, value),
    }
}

fn check_as<T: DeserializeOwned>(key: StorageKey, value: &Value) -> Result<(), ImportError> {
    serde_json::from_value::<T>(value.clone())
        .map(|_| ())
        .map_err(|err| ImportError::InvalidDocument(format!("slot `{key}`: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{backup_file_name, compress_entry, decode_archive, ImportError};
    use chrono::{TimeZone, Utc};

    #[test]
    fn file_name_replaces_colons_and_dots() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 5).unwrap();
        assert_eq!(
            backup_file_name(at),
            "inventory-backup-2026-10-19T08-30-05-000Z.json.gz"
        );
    }

    #[test]
    fn decode_rejects_unknown_slot_names() {
        let bytes = compress_entry(br#"{"sessions": []}"#, Utc::now()).unwrap();
        let err = decode_archive(&bytes).unwrap_err();
        assert!(matches!(err, ImportError::InvalidDocument(ref message) if message.contains("sessions")));
    }

    #[test]
    fn decode_rejects_mis_shaped_collection() {
        let bytes = compress_entry(br#"{"companies": {"id": "c1"}}"#, Utc::now()).unwrap();
        let err = decode_archive(&bytes).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn decode_accepts_null_pointer() {
        let bytes = compress_entry(br#"{"activeCompany": null}"#, Utc::now()).unwrap();
        let entries = decode_archive(&bytes).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].1.is_null());
    }
}
