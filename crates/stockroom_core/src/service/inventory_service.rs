//! Inventory use-case service.

use crate::model::inventory::{CreateInventoryRequest, InventoryRecord, UpdateInventoryRequest};
use crate::repo::inventory_repo::InventoryRepository;
use crate::repo::RepoResult;

pub struct InventoryService<R: InventoryRepository> {
    repo: R,
}

impl<R: InventoryRepository> InventoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_inventory(
        &self,
        request: CreateInventoryRequest,
    ) -> RepoResult<InventoryRecord> {
        self.repo.create_inventory(&request)
    }

    pub async fn update_inventory(
        &self,
        request: UpdateInventoryRequest,
    ) -> RepoResult<InventoryRecord> {
        self.repo.update_inventory(&request)
    }

    pub async fn delete_inventory(&self, inventory_id: &str) -> RepoResult<()> {
        self.repo.delete_inventory(inventory_id)
    }

    pub async fn list_inventory(&self) -> RepoResult<Vec<InventoryRecord>> {
        self.repo.list_inventory()
    }

    pub async fn list_inventory_by_department(
        &self,
        department_id: &str,
    ) -> RepoResult<Vec<InventoryRecord>> {
        self.repo.list_inventory_by_department(department_id)
    }

    pub async fn get_inventory(&self, inventory_id: &str) -> RepoResult<Option<InventoryRecord>> {
        self.repo.get_inventory(inventory_id)
    }
}
