//! minigit - An in-memory, single-branch commit history
//!
//! minigit models a repository as a singly-linked chain of commits, newest
//! first, and offers a small console client to drive it: create
//! repositories, record commits, inspect history, reset, drop and squash.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, the commit chain, the repository registry, config
//! - [`cli`] - Argument parsing, the REPL session and command handlers
//! - [`ui`] - Output and prompt utilities
//! - [`logging`] - Diagnostic logging setup
//!
//! # Correctness Invariants
//!
//! 1. A repository's commit count always equals the length of its chain
//! 2. Every live commit id is unique within the process
//! 3. Failed operations never partially modify a repository

pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
