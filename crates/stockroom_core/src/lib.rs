//! Core domain logic for Stockroom.
//! This crate is the single source of truth for business invariants.

pub mod archive;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use archive::{
    backup_file_name, export_storage, import_storage, BackupArchive, ExportError, ImportError,
    ImportSummary, DEFAULT_EXPORT_KEYS,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::company::{Company, CreateCompanyRequest, UpdateCompanyRequest};
pub use model::department::{CreateDepartmentRequest, Department, UpdateDepartmentRequest};
pub use model::inventory::{CreateInventoryRequest, InventoryRecord, UpdateInventoryRequest};
pub use model::item::{CreateItemRequest, Item, ItemCategory, UpdateItemRequest};
pub use model::preference::Language;
pub use model::unit::{CreateUnitRequest, Unit, UpdateUnitRequest};
pub use model::{EntityId, ValidationError};
pub use repo::company_repo::{CompanyRepository, StoreCompanyRepository};
pub use repo::department_repo::{DepartmentRepository, StoreDepartmentRepository};
pub use repo::inventory_repo::{InventoryRepository, StoreInventoryRepository};
pub use repo::item_repo::{ItemRepository, StoreItemRepository};
pub use repo::preference_repo::{PreferenceRepository, StorePreferenceRepository};
pub use repo::unit_repo::{StoreUnitRepository, UnitRepository};
pub use repo::{EntityKind, RepoError, RepoResult};
pub use service::backup_service::BackupService;
pub use service::company_service::CompanyService;
pub use service::department_service::DepartmentService;
pub use service::inventory_service::InventoryService;
pub use service::item_service::ItemService;
pub use service::preference_service::PreferenceService;
pub use service::selection_service::ActiveSelectionCoordinator;
pub use service::unit_service::UnitService;
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageKey, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
