//! Unit-of-measure record.

use super::{validate_id, validate_name, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitRequest {
    pub name: String,
}

impl CreateUnitRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("unit name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUnitRequest {
    pub id: EntityId,
    pub name: String,
}

impl UpdateUnitRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id("unit id", &self.id)?;
        validate_name("unit name", &self.name)
    }
}
