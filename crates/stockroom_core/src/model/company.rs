//! Company record: root of the hierarchy.

use super::{validate_id, validate_name, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: EntityId,
    /// Unique across all companies, exact match.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    pub name: String,
}

impl CreateCompanyRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("company name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    pub id: EntityId,
    pub name: String,
}

impl UpdateCompanyRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id("company id", &self.id)?;
        validate_name("company name", &self.name)
    }
}
