//! core::repository
//!
//! A named, single-branch commit history.
//!
//! # Architecture
//!
//! The history is a singly-linked chain of boxed commits, newest first:
//! - `head` owns the most recent commit
//! - each commit owns its predecessor through `previous`
//! - the root commit has no predecessor
//!
//! All splicing goes through [`Repository`] methods; the chain itself is
//! never exposed mutably.
//!
//! # Invariants
//!
//! - `count == 0` iff `head` is `None`
//! - walking `previous` links from `head` visits exactly `count` commits
//! - every live commit id is unique within the process
//!
//! # Example
//!
//! ```
//! use minigit::core::repository::Repository;
//!
//! let mut repo = Repository::new("r1").unwrap();
//! repo.commit("a");
//! let b = repo.commit("b");
//! let c = repo.commit("c");
//!
//! assert_eq!(repo.len(), 3);
//! assert_eq!(repo.head(), Some(&c));
//! assert_eq!(
//!     repo.history(2).unwrap(),
//!     vec![format!("{c}: c"), format!("{b}: b")]
//! );
//! ```

use thiserror::Error;
use tracing::debug;

use super::types::{CommitId, RepoName, TypeError};

/// Errors from repository operations.
///
/// Every error is raised before any mutation, so a failed call leaves the
/// repository untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<TypeError> for RepoError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidRepoName(msg) => RepoError::InvalidArgument(msg),
        }
    }
}

type Link = Option<Box<Commit>>;

/// A single commit in a repository's history.
#[derive(Debug)]
pub struct Commit {
    id: CommitId,
    message: String,
    previous: Link,
}

impl Commit {
    /// The commit's id.
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    /// The commit's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Commit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}

/// A named repository owning a newest-first chain of commits.
#[derive(Debug)]
pub struct Repository {
    name: RepoName,
    head: Link,
    count: usize,
}

impl Repository {
    /// Create an empty repository.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidArgument` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, RepoError> {
        Ok(Self::with_name(RepoName::new(name)?))
    }

    /// Create an empty repository from an already validated name.
    pub fn with_name(name: RepoName) -> Self {
        Self {
            name,
            head: None,
            count: 0,
        }
    }

    /// The repository name.
    pub fn name(&self) -> &RepoName {
        &self.name
    }

    /// Number of live commits.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the repository has no commits.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Id of the current head, or `None` if there are no commits.
    pub fn head(&self) -> Option<&CommitId> {
        self.head.as_ref().map(|commit| &commit.id)
    }

    /// Human-readable summary of the repository and its head.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Iterate over live commits, newest first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// The `n` most recent commits rendered as `"<id>: <message>"`, newest
    /// first. `n` is clamped to the number of commits.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidArgument` if `n` is negative.
    pub fn history(&self, n: i64) -> Result<Vec<String>, RepoError> {
        let n = Self::check_count(n)?;
        Ok(self.iter().take(n).map(Commit::to_string).collect())
    }

    /// Same as [`Repository::history`], one entry per line.
    ///
    /// Each entry is terminated by a newline; an empty history renders as an
    /// empty string.
    pub fn history_text(&self, n: i64) -> Result<String, RepoError> {
        Ok(self
            .history(n)?
            .into_iter()
            .map(|entry| entry + "\n")
            .collect())
    }

    /// Record a new commit on top of the current head and return its id.
    pub fn commit(&mut self, message: impl Into<String>) -> CommitId {
        let id = CommitId::generate();
        let previous = self.head.take();
        self.head = Some(Box::new(Commit {
            id: id.clone(),
            message: message.into(),
            previous,
        }));
        self.count += 1;
        debug!(repo = %self.name, id = %id, count = self.count, "commit created");
        id
    }

    /// Move head back by `n` commits, discarding everything newer.
    ///
    /// Resetting by at least the number of commits empties the repository.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidArgument` if `n` is negative.
    pub fn reset(&mut self, n: i64) -> Result<(), RepoError> {
        let n = Self::check_count(n)?;
        if n >= self.count {
            release(self.head.take());
            self.count = 0;
        } else {
            for _ in 0..n {
                self.head = self.head.take().and_then(|mut commit| commit.previous.take());
            }
            self.count -= n;
        }
        debug!(repo = %self.name, discarded = n, count = self.count, "reset");
        Ok(())
    }

    /// Remove the commit with the given id, relinking around it.
    ///
    /// Returns the dropped id, or `None` if no live commit matches (including
    /// when the repository is empty).
    pub fn drop(&mut self, id: &str) -> Option<CommitId> {
        if self.is_empty() {
            return None;
        }

        let link = self.link_to(id);
        let mut removed = link.take()?;
        *link = removed.previous.take();
        self.count -= 1;
        debug!(repo = %self.name, id = %removed.id, count = self.count, "commit dropped");
        Some(removed.id)
    }

    /// Combine the target commit with its immediate newer neighbour.
    ///
    /// The target keeps its position and predecessor, takes the message
    /// `"SQUASHED: <newer> / <target>"` and a fresh id; the newer commit is
    /// removed. Returns the target's original id, or `None` when the target
    /// is missing or is the head (nothing newer to fold into it).
    pub fn squash(&mut self, id: &str) -> Option<CommitId> {
        if self.is_empty() {
            return None;
        }

        // Advance to the link holding the commit whose predecessor is the target.
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|newer| newer.previous.as_ref().is_some_and(|p| p.id != *id))
        {
            if let Some(newer) = cursor {
                cursor = &mut newer.previous;
            }
        }

        let found = cursor
            .as_ref()
            .and_then(|newer| newer.previous.as_ref())
            .is_some();
        if !found {
            return None;
        }

        let mut newer = cursor.take()?;
        let mut target = newer.previous.take()?;
        target.message = format!("SQUASHED: {} / {}", newer.message, target.message);
        let original = std::mem::replace(&mut target.id, CommitId::generate());
        *cursor = Some(target);
        self.count -= 1;
        debug!(
            repo = %self.name,
            original = %original,
            removed = %newer.id,
            count = self.count,
            "commits squashed"
        );
        Some(original)
    }

    /// The link that owns the commit with `id`, or the terminal empty link.
    fn link_to(&mut self, id: &str) -> &mut Link {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|commit| commit.id != *id) {
            if let Some(commit) = cursor {
                cursor = &mut commit.previous;
            }
        }
        cursor
    }

    fn check_count(n: i64) -> Result<usize, RepoError> {
        usize::try_from(n)
            .map_err(|_| RepoError::InvalidArgument(format!("count must not be negative, got {n}")))
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.head.as_deref() {
            None => write!(f, "{} - No commits", self.name),
            Some(head) => write!(f, "{} - Current head: {}", self.name, head),
        }
    }
}

impl Drop for Repository {
    fn drop(&mut self) {
        release(self.head.take());
    }
}

/// Free a chain one commit at a time instead of recursing through `Box` drops.
fn release(mut link: Link) {
    while let Some(mut commit) = link {
        link = commit.previous.take();
    }
}

/// Newest-first iterator over a repository's commits.
pub struct Iter<'a> {
    next: Option<&'a Commit>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.next?;
        self.next = commit.previous.as_deref();
        Some(commit)
    }
}

impl<'a> IntoIterator for &'a Repository {
    type Item = &'a Commit;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
