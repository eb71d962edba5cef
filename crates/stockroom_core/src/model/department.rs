//! Department record, owned by a company.
//!
//! `company_id` is a plain reference: it is not checked against the
//! company collection and survives deletion of the company.

use super::{validate_id, validate_name, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: EntityId,
    pub company_id: EntityId,
    /// Unique among departments sharing `company_id`.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    pub company_id: EntityId,
    pub name: String,
}

impl CreateDepartmentRequest {
    pub fn new(company_id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id("company id", &self.company_id)?;
        validate_name("department name", &self.name)
    }
}

/// Renames an existing department. The owning company never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    pub id: EntityId,
    pub name: String,
}

impl UpdateDepartmentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id("department id", &self.id)?;
        validate_name("department name", &self.name)
    }
}
