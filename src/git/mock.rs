//! git::mock
//!
//! In-memory commit source for deterministic testing.
//!
//! # Design
//!
//! `MockRepo` stores a commit DAG, refs, stash entries and a dirty flag in
//! memory and implements [`CommitSource`]. Commit ids are derived from a
//! counter, so the same sequence of builder calls always yields the same
//! ids. Lookups are recorded so tests can check memoization.
//!
//! # Example
//!
//! ```
//! use lanegraph::git::mock::MockRepo;
//! use lanegraph::git::CommitSource;
//!
//! let mut repo = MockRepo::new();
//! let root = repo.commit("Initial commit", 1, &[]);
//! let tip = repo.commit("Add feature", 2, &[&root]);
//! repo.branch("main", &tip);
//! repo.set_head(&tip);
//!
//! let head = repo.head_commit().unwrap().unwrap();
//! assert_eq!(head.short_message, "Add feature");
//! assert_eq!(head.parents, vec![root]);
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use super::{CommitSource, GitError};
use crate::core::types::{Oid, RefName};
use crate::graph::{Commit, RefTip, Signature};

/// In-memory repository.
#[derive(Debug, Default)]
pub struct MockRepo {
    /// Stored commits by id.
    commits: HashMap<Oid, Commit>,
    /// Refs in insertion order.
    refs: Vec<RefTip>,
    /// Stash entries, newest first.
    stashes: Vec<Oid>,
    /// Commit HEAD points at (`None` means unborn).
    head: Option<Oid>,
    /// Whether the working tree is dirty.
    dirty: bool,
    /// Counter used to mint commit ids.
    next_id: u64,
    /// Number of `resolve_commit` calls per id.
    lookups: Mutex<HashMap<Oid, usize>>,
}

impl MockRepo {
    /// Create an empty repository (unborn HEAD, clean worktree).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a commit and return its id.
    ///
    /// `message` may span several lines; its first line becomes the short
    /// message. The author time equals the committer time.
    pub fn commit(&mut self, message: &str, time: i64, parents: &[&Oid]) -> Oid {
        self.next_id += 1;
        let id = Oid::new(format!("{:040x}", self.next_id)).expect("40 hex digits form a valid oid");

        let commit = Commit {
            id: id.clone(),
            short_message: message.lines().next().unwrap_or_default().to_string(),
            full_message: format!("{message}\n"),
            author: Signature {
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
                time: chrono::DateTime::from_timestamp(time, 0).unwrap_or_default(),
            },
            committer_time: time,
            parents: parents.iter().map(|&p| p.clone()).collect(),
        };
        self.commits.insert(id.clone(), commit);
        id
    }

    /// Point `refs/heads/<name>` at `target`.
    pub fn branch(&mut self, name: &str, target: &Oid) {
        self.add_ref(&format!("refs/heads/{name}"), target);
    }

    /// Point `refs/tags/<name>` at `target`.
    pub fn tag(&mut self, name: &str, target: &Oid) {
        self.add_ref(&format!("refs/tags/{name}"), target);
    }

    /// Point an arbitrary ref at `target`, replacing any previous target.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid ref name.
    pub fn add_ref(&mut self, name: &str, target: &Oid) {
        let name = RefName::new(name).expect("mock ref names must be valid");
        self.refs.retain(|r| r.name != name);
        self.refs.push(RefTip::new(name, target.clone()));
    }

    /// Set the commit HEAD points at.
    pub fn set_head(&mut self, target: &Oid) {
        self.head = Some(target.clone());
    }

    /// Mark the working tree dirty or clean.
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Record a stash entry the way `git stash` shapes it.
    ///
    /// Creates the `index on <branch>: ...` commit (parent `base`), an
    /// optional `untracked files on <branch>: ...` root commit, and the
    /// stash commit itself with parents `[base, index, untracked?]`.
    /// Returns the stash commit id.
    pub fn stash(
        &mut self,
        branch: &str,
        message: &str,
        time: i64,
        base: &Oid,
        with_untracked: bool,
    ) -> Oid {
        let base_summary = self
            .commits
            .get(base)
            .map(|c| format!("{} {}", c.id.short(7), c.short_message))
            .unwrap_or_default();

        let index = self.commit(&format!("index on {branch}: {base_summary}"), time, &[base]);
        let mut parents = vec![base.clone(), index];
        if with_untracked {
            let untracked =
                self.commit(&format!("untracked files on {branch}: {base_summary}"), time, &[]);
            parents.push(untracked);
        }

        let parent_refs: Vec<&Oid> = parents.iter().collect();
        let stash = self.commit(&format!("On {branch}: {message}"), time, &parent_refs);
        self.stashes.insert(0, stash.clone());
        stash
    }

    /// Drop a commit from the store, leaving dangling references to it.
    pub fn forget(&mut self, id: &Oid) {
        self.commits.remove(id);
    }

    /// How many times `resolve_commit` was called for `id`.
    pub fn resolve_count(&self, id: &Oid) -> usize {
        self.lookups
            .lock()
            .map(|lookups| lookups.get(id).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    fn lookup(&self, id: &Oid) -> Result<Commit, GitError> {
        self.commits
            .get(id)
            .cloned()
            .ok_or_else(|| GitError::ObjectNotFound { oid: id.to_string() })
    }
}

impl CommitSource for MockRepo {
    fn resolve_commit(&self, id: &Oid) -> Result<Commit, GitError> {
        if let Ok(mut lookups) = self.lookups.lock() {
            *lookups.entry(id.clone()).or_insert(0) += 1;
        }
        self.lookup(id)
    }

    fn head_commit(&self) -> Result<Option<Commit>, GitError> {
        self.head.as_ref().map(|id| self.lookup(id)).transpose()
    }

    fn list_ref_tips(&self) -> Result<Vec<RefTip>, GitError> {
        Ok(self
            .refs
            .iter()
            .filter(|r| !r.name.is_stash_ref())
            .cloned()
            .collect())
    }

    fn list_stash_tips(&self) -> Result<Vec<Commit>, GitError> {
        self.stashes.iter().map(|id| self.lookup(id)).collect()
    }

    fn has_uncommitted_changes(&self) -> Result<bool, GitError> {
        Ok(self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_deterministic() {
        let mut one = MockRepo::new();
        let mut two = MockRepo::new();
        assert_eq!(one.commit("a", 1, &[]), two.commit("a", 1, &[]));
    }

    #[test]
    fn unborn_head() {
        let repo = MockRepo::new();
        assert!(repo.head_commit().unwrap().is_none());
    }

    #[test]
    fn short_message_is_first_line() {
        let mut repo = MockRepo::new();
        let id = repo.commit("Subject\n\nBody text", 1, &[]);
        let commit = repo.resolve_commit(&id).unwrap();
        assert_eq!(commit.short_message, "Subject");
        assert_eq!(commit.full_message, "Subject\n\nBody text\n");
    }

    #[test]
    fn stash_shape() {
        let mut repo = MockRepo::new();
        let base = repo.commit("Base", 1, &[]);
        let stash = repo.stash("main", "wip", 2, &base, true);

        let commit = repo.resolve_commit(&stash).unwrap();
        assert_eq!(commit.parents.len(), 3);
        assert_eq!(commit.parents[0], base);

        let index = repo.resolve_commit(&commit.parents[1]).unwrap();
        assert!(index.short_message.starts_with("index on main:"));
        let untracked = repo.resolve_commit(&commit.parents[2]).unwrap();
        assert!(untracked.short_message.starts_with("untracked files on main:"));

        let tips = repo.list_stash_tips().unwrap();
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].id, stash);
    }

    #[test]
    fn stash_ref_not_listed() {
        let mut repo = MockRepo::new();
        let base = repo.commit("Base", 1, &[]);
        repo.add_ref("refs/stash", &base);
        repo.branch("main", &base);

        let refs = repo.list_ref_tips().unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].short_name(), "main");
    }

    #[test]
    fn forget_makes_lookup_fail() {
        let mut repo = MockRepo::new();
        let a = repo.commit("a", 1, &[]);
        repo.forget(&a);
        assert!(matches!(
            repo.resolve_commit(&a),
            Err(GitError::ObjectNotFound { .. })
        ));
        assert_eq!(repo.resolve_count(&a), 1);
    }
}
