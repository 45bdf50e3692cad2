//! core
//!
//! Core domain types and the commit history model.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RepoName, CommitId
//! - [`repository`] - Named commit chain with commit/reset/drop/squash
//! - [`registry`] - Name-keyed set of repositories
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Chain mutation is private to the repository
//! - Failed operations never leave partial changes

pub mod config;
pub mod registry;
pub mod repository;
pub mod types;
