//! git::source
//!
//! The read-only view of a repository the graph walk consumes.

use super::GitError;
use crate::core::types::Oid;
use crate::graph::{Commit, RefTip};

/// Resolves commits and enumerates the tips a commit graph starts from.
///
/// Implementations never mutate the repository. [`crate::git::Git`] reads a
/// real repository through `git2`; [`crate::git::mock::MockRepo`] serves an
/// in-memory DAG for tests.
pub trait CommitSource {
    /// Look up a commit by id.
    ///
    /// # Errors
    ///
    /// - [`GitError::ObjectNotFound`] if the id is unknown or not a commit
    fn resolve_commit(&self, id: &Oid) -> Result<Commit, GitError>;

    /// The commit HEAD points at, or `None` for an unborn HEAD.
    fn head_commit(&self) -> Result<Option<Commit>, GitError>;

    /// Every ref that peels to a commit, except `refs/stash`.
    fn list_ref_tips(&self) -> Result<Vec<RefTip>, GitError>;

    /// Every stash entry, newest first.
    fn list_stash_tips(&self) -> Result<Vec<Commit>, GitError>;

    /// Whether the working tree or index differs from HEAD.
    fn has_uncommitted_changes(&self) -> Result<bool, GitError>;
}
