//! Domain model for companies, departments, units, items and inventory.
//!
//! # Responsibility
//! - Define the persisted record shapes and the request records callers
//!   hand to repositories.
//! - Provide field validation shared by create and update paths.
//!
//! # Invariants
//! - Every record is identified by an opaque `EntityId` that is never
//!   reused.
//! - JSON field names are camelCase to match the persisted slot layout.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod company;
pub mod department;
pub mod inventory;
pub mod item;
pub mod preference;
pub mod unit;

/// Opaque identifier shared by every entity family.
pub type EntityId = String;

/// Minimum accepted length (in chars) for names and descriptions.
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum accepted length (in chars) for names and descriptions.
pub const NAME_MAX_CHARS: usize = 150;

/// Generates a fresh entity identifier.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// Field-level validation failure raised before any storage write.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Text field length is outside `NAME_MIN_CHARS..=NAME_MAX_CHARS`.
    LengthOutOfRange {
        field: &'static str,
        actual: usize,
    },
    /// Identifier field is empty.
    EmptyId(&'static str),
    /// Quantity is negative or not a finite number.
    InvalidQuantity(f64),
    /// Language code is not one of the supported codes.
    UnsupportedLanguage(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthOutOfRange { field, actual } => write!(
                f,
                "{field} must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters, got {actual}"
            ),
            Self::EmptyId(field) => write!(f, "{field} cannot be empty"),
            Self::InvalidQuantity(value) => {
                write!(f, "quantity must be a finite number >= 0, got {value}")
            }
            Self::UnsupportedLanguage(code) => write!(f, "unsupported language `{code}`"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&actual) {
        return Err(ValidationError::LengthOutOfRange { field, actual });
    }
    Ok(())
}

pub(crate) fn validate_id(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyId(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{new_entity_id, validate_id, validate_name, ValidationError};

    #[test]
    fn validate_name_counts_chars_not_bytes() {
        assert!(validate_name("name", "ñu").is_ok());
        assert_eq!(
            validate_name("name", "x"),
            Err(ValidationError::LengthOutOfRange {
                field: "name",
                actual: 1
            })
        );
        assert!(validate_name("name", &"a".repeat(151)).is_err());
        assert!(validate_name("name", &"a".repeat(150)).is_ok());
    }

    #[test]
    fn validate_id_rejects_blank() {
        assert_eq!(validate_id("id", "  "), Err(ValidationError::EmptyId("id")));
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(new_entity_id(), new_entity_id());
    }
}
