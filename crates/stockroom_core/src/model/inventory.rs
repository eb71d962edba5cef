//! Inventory movement record: quantity of one item in one department on a
//! given day.

use super::{validate_id, EntityId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: EntityId,
    pub item_id: EntityId,
    pub department_id: EntityId,
    /// Always finite and `>= 0`.
    pub quantity: f64,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryRequest {
    pub item_id: EntityId,
    pub department_id: EntityId,
    pub quantity: f64,
    pub date: NaiveDate,
}

impl CreateInventoryRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id("item id", &self.item_id)?;
        validate_id("department id", &self.department_id)?;
        validate_quantity(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryRequest {
    pub id: EntityId,
    pub item_id: EntityId,
    pub department_id: EntityId,
    pub quantity: f64,
    pub date: NaiveDate,
}

impl UpdateInventoryRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id("inventory id", &self.id)?;
        validate_id("item id", &self.item_id)?;
        validate_id("department id", &self.department_id)?;
        validate_quantity(self.quantity)
    }
}

fn validate_quantity(quantity: f64) -> Result<(), ValidationError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(ValidationError::InvalidQuantity(quantity));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_quantity;

    #[test]
    fn quantity_must_be_finite_and_non_negative() {
        assert!(validate_quantity(0.0).is_ok());
        assert!(validate_quantity(12.5).is_ok());
        assert!(validate_quantity(-0.5).is_err());
        assert!(validate_quantity(f64::NAN).is_err());
        assert!(validate_quantity(f64::INFINITY).is_err());
    }
}
