//! Company use-case service.

use crate::model::company::{Company, CreateCompanyRequest, UpdateCompanyRequest};
use crate::repo::company_repo::CompanyRepository;
use crate::repo::RepoResult;

/// Async facade over a company repository.
///
/// Activation lives in `ActiveSelectionCoordinator` so the department
/// cascade cannot be skipped.
pub struct CompanyService<R: CompanyRepository> {
    repo: R,
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_company(&self, request: CreateCompanyRequest) -> RepoResult<Company> {
        self.repo.create_company(&request)
    }

    /// Returns repository not-found/duplicate errors unchanged.
    pub async fn update_company(&self, request: UpdateCompanyRequest) -> RepoResult<Company> {
        self.repo.update_company(&request)
    }

    /// Deletes the company only; departments and pointers are left as is.
    pub async fn delete_company(&self, company_id: &str) -> RepoResult<()> {
        self.repo.delete_company(company_id)
    }

    pub async fn list_companies(&self) -> RepoResult<Vec<Company>> {
        self.repo.list_companies()
    }

    pub async fn get_company(&self, company_id: &str) -> RepoResult<Option<Company>> {
        self.repo.get_company(company_id)
    }

    pub async fn get_active_company(&self) -> RepoResult<Option<Company>> {
        self.repo.get_active_company()
    }
}
