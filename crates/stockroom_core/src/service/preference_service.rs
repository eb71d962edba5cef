//! Language preference service.

use crate::model::preference::Language;
use crate::repo::preference_repo::PreferenceRepository;
use crate::repo::RepoResult;

pub struct PreferenceService<R: PreferenceRepository> {
    repo: R,
}

impl<R: PreferenceRepository> PreferenceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_language(&self) -> RepoResult<Language> {
        self.repo.get_language()
    }

    /// Stores a language given as a code such as `en`.
    ///
    /// Unsupported codes fail with `RepoError::Validation`.
    pub async fn set_language(&self, code: &str) -> RepoResult<Language> {
        let language = Language::from_code(code)?;
        self.repo.set_language(language)?;
        Ok(language)
    }
}
