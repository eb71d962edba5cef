//! Entity repositories over the key-value store.
//!
//! # Responsibility
//! - Enforce uniqueness and existence rules for every entity family.
//! - Manage the active company/department pointers.
//! - Isolate slot layout and JSON details from services.
//!
//! # Invariants
//! - Every mutation reads the whole collection fresh, changes it in memory
//!   and writes the whole collection back.
//! - Field validation runs before any storage write.
//! - Deletes never cascade and unknown ids delete as a no-op.
//! - Rule checks live in pure functions over `&mut Vec<_>` so they can be
//!   exercised without a store.

use crate::model::{EntityId, ValidationError};
use crate::storage::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod collection;
pub mod company_repo;
pub mod department_repo;
pub mod inventory_repo;
pub mod item_repo;
pub mod preference_repo;
pub mod unit_repo;

pub use collection::Record;

pub type RepoResult<T> = Result<T, RepoError>;

/// Entity family named in repository errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Company,
    Department,
    Unit,
    Item,
    Inventory,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Company => "company",
            Self::Department => "department",
            Self::Unit => "unit",
            Self::Item => "item",
            Self::Inventory => "inventory record",
        })
    }
}

/// Repository error shared by all entity families.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    /// A uniqueness rule would be violated; `field` names the colliding field.
    DuplicateName {
        entity: EntityKind,
        field: &'static str,
    },
    NotFound {
        entity: EntityKind,
        id: EntityId,
    },
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateName { entity, field } => {
                write!(f, "a {entity} with the same {field} already exists")
            }
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateName { .. } => None,
            Self::NotFound { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
