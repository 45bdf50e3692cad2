//! core::registry
//!
//! The set of repositories a client session works with, keyed by name.
//!
//! Lookups are exact and case-sensitive. Iteration is ordered by name so
//! listings are stable.

use std::collections::BTreeMap;

use thiserror::Error;

use super::repository::Repository;
use super::types::{RepoName, TypeError};

/// Errors from registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("repository '{0}' already exists")]
    AlreadyExists(RepoName),

    #[error(transparent)]
    InvalidName(#[from] TypeError),
}

/// Name-keyed collection of independent repositories.
#[derive(Debug, Default)]
pub struct Registry {
    repos: BTreeMap<RepoName, Repository>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a new empty repository.
    ///
    /// # Errors
    ///
    /// - `RegistryError::InvalidName` if the name is empty
    /// - `RegistryError::AlreadyExists` if the name is taken
    pub fn create(&mut self, name: &str) -> Result<&Repository, RegistryError> {
        let name = RepoName::new(name)?;
        if self.repos.contains_key(&name) {
            return Err(RegistryError::AlreadyExists(name));
        }
        let repo = Repository::with_name(name.clone());
        Ok(self.repos.entry(name).or_insert(repo))
    }

    /// Look up a repository by name.
    pub fn get(&self, name: &str) -> Option<&Repository> {
        self.repos.get(name)
    }

    /// Look up a repository by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Repository> {
        self.repos.get_mut(name)
    }

    /// Whether a repository with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.repos.contains_key(name)
    }

    /// All repositories, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &Repository> {
        self.repos.values()
    }

    /// Number of repositories.
    pub fn len(&self) -> usize {
        self.repos.len()
    }

    /// Whether the registry holds no repositories.
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}
