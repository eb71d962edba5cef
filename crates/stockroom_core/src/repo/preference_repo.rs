//! Language preference repository.

use super::RepoResult;
use crate::model::preference::Language;
use crate::storage::{read_json, write_json, KeyValueStore, StorageKey};
use log::warn;

/// Repository interface for user preferences.
pub trait PreferenceRepository {
    /// Stored language, or the default when the slot is empty or unknown.
    fn get_language(&self) -> RepoResult<Language>;
    fn set_language(&self, language: Language) -> RepoResult<()>;
}

pub struct StorePreferenceRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StorePreferenceRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> PreferenceRepository for StorePreferenceRepository<S> {
    fn get_language(&self) -> RepoResult<Language> {
        let Some(code) = read_json::<String, S>(&self.store, StorageKey::Language)? else {
            return Ok(Language::default());
        };
        match Language::from_code(&code) {
            Ok(language) => Ok(language),
            Err(err) => {
                warn!(
                    "event=language_read module=repo status=fallback error={}",
                    err
                );
                Ok(Language::default())
            }
        }
    }

    fn set_language(&self, language: Language) -> RepoResult<()> {
        write_json(&self.store, StorageKey::Language, language.code())?;
        Ok(())
    }
}
