//! graph::cache
//!
//! Memoized commit lookups for a single walk.
//!
//! The cache is owned by one walk invocation and dropped with it. Entries
//! are never invalidated mid-walk.

use std::collections::HashMap;
use std::sync::Arc;

use super::commit::Commit;
use super::GraphError;
use crate::core::types::Oid;
use crate::git::CommitSource;

/// Lazily populated commit cache in front of a [`CommitSource`].
pub struct CommitCache<'a, S: CommitSource + ?Sized> {
    source: &'a S,
    commits: HashMap<Oid, Arc<Commit>>,
}

impl<'a, S: CommitSource + ?Sized> CommitCache<'a, S> {
    /// Create an empty cache reading from `source`.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            commits: HashMap::new(),
        }
    }

    /// Insert an already-resolved commit.
    pub fn insert(&mut self, commit: Commit) -> Arc<Commit> {
        let commit = Arc::new(commit);
        self.commits
            .entry(commit.id.clone())
            .or_insert(commit)
            .clone()
    }

    /// Resolve a commit, asking the source only on the first lookup.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ResolveCommit`] if the source cannot resolve `id`.
    pub fn get(&mut self, id: &Oid) -> Result<Arc<Commit>, GraphError> {
        if let Some(commit) = self.commits.get(id) {
            return Ok(Arc::clone(commit));
        }

        let commit = self
            .source
            .resolve_commit(id)
            .map_err(|source| GraphError::ResolveCommit {
                id: id.clone(),
                source,
            })?;
        Ok(self.insert(commit))
    }

    /// Resolve every parent of `commit`, in recorded order.
    pub fn parents(&mut self, commit: &Commit) -> Result<Vec<Arc<Commit>>, GraphError> {
        commit.parents.iter().map(|id| self.get(id)).collect()
    }

    /// Number of cached commits.
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Check if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}
