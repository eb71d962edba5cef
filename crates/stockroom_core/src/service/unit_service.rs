//! Unit use-case service.

use crate::model::unit::{CreateUnitRequest, Unit, UpdateUnitRequest};
use crate::repo::unit_repo::UnitRepository;
use crate::repo::RepoResult;

pub struct UnitService<R: UnitRepository> {
    repo: R,
}

impl<R: UnitRepository> UnitService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_unit(&self, request: CreateUnitRequest) -> RepoResult<Unit> {
        self.repo.create_unit(&request)
    }

    pub async fn update_unit(&self, request: UpdateUnitRequest) -> RepoResult<Unit> {
        self.repo.update_unit(&request)
    }

    pub async fn delete_unit(&self, unit_id: &str) -> RepoResult<()> {
        self.repo.delete_unit(unit_id)
    }

    pub async fn list_units(&self) -> RepoResult<Vec<Unit>> {
        self.repo.list_units()
    }

    pub async fn get_unit(&self, unit_id: &str) -> RepoResult<Option<Unit>> {
        self.repo.get_unit(unit_id)
    }
}
