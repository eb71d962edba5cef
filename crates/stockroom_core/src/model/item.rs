//! Catalog item record.
//!
//! # Invariants
//! - `description` is unique across all items, exact match.
//! - `unit` names a unit id but is not checked against the unit collection.

use super::{validate_id, validate_name, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

/// Fixed catalog category.
///
/// Serialized PascalCase; lowercase spellings are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    #[serde(alias = "office")]
    Office,
    #[serde(alias = "cleaning")]
    Cleaning,
    #[serde(alias = "cafeteria")]
    Cafeteria,
    #[serde(alias = "stationery")]
    Stationery,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::Office,
        ItemCategory::Cleaning,
        ItemCategory::Cafeteria,
        ItemCategory::Stationery,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: EntityId,
    pub category: ItemCategory,
    pub description: String,
    /// Unit id.
    pub unit: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub category: ItemCategory,
    pub description: String,
    pub unit: EntityId,
}

impl CreateItemRequest {
    pub fn new(
        category: ItemCategory,
        description: impl Into<String>,
        unit: impl Into<EntityId>,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            unit: unit.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("item description", &self.description)?;
        validate_id("unit id", &self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub id: EntityId,
    pub category: ItemCategory,
    pub description: String,
    pub unit: EntityId,
}

impl UpdateItemRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id("item id", &self.id)?;
        validate_name("item description", &self.description)?;
        validate_id("unit id", &self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemCategory};

    #[test]
    fn category_accepts_lowercase_and_writes_pascal_case() {
        let item: Item = serde_json::from_str(
            r#"{"id":"i1","category":"stationery","description":"Pens","unit":"u1"}"#,
        )
        .unwrap();
        assert_eq!(item.category, ItemCategory::Stationery);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["category"], "Stationery");
    }
}
