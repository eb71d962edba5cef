//! Catalog item use-case service.

use crate::model::item::{CreateItemRequest, Item, UpdateItemRequest};
use crate::repo::item_repo::ItemRepository;
use crate::repo::RepoResult;

pub struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_item(&self, request: CreateItemRequest) -> RepoResult<Item> {
        self.repo.create_item(&request)
    }

    pub async fn update_item(&self, request: UpdateItemRequest) -> RepoResult<Item> {
        self.repo.update_item(&request)
    }

    pub async fn delete_item(&self, item_id: &str) -> RepoResult<()> {
        self.repo.delete_item(item_id)
    }

    pub async fn list_items(&self) -> RepoResult<Vec<Item>> {
        self.repo.list_items()
    }

    pub async fn get_item(&self, item_id: &str) -> RepoResult<Option<Item>> {
        self.repo.get_item(item_id)
    }
}
