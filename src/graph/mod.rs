//! graph
//!
//! Lane-annotated commit graph construction.
//!
//! # Architecture
//!
//! The walk reads commits through a [`CommitSource`](crate::git::CommitSource)
//! and produces a [`GraphCommitList`]: one [`GraphRow`] per commit, newest
//! first, each carrying the lane it sits on and the lanes that fork into,
//! merge out of, or pass through it.
//!
//! - [`commit`] - Commit and ref data read from the source
//! - [`cache`] - Per-walk memoized commit lookups
//! - [`lanes`] - Lane allocator
//! - [`parents`] - Parent ordering and stash parent filtering
//! - [`frontier`] - Best-first candidate queue
//! - [`walk`] - The walk itself
//! - [`list`] - Walk output
//! - [`log`] - Gathers walk inputs from a repository
//!
//! # Invariants
//!
//! - Every commit reachable from the seeds appears at most once
//! - Walks share no state; two walks over the same input are identical

pub mod cache;
pub mod commit;
pub mod frontier;
pub mod lanes;
pub mod list;
pub mod log;
pub mod parents;
pub mod walk;

use thiserror::Error;

use crate::core::types::Oid;
use crate::git::GitError;

pub use cache::CommitCache;
pub use commit::{Commit, RefKind, RefTip, Signature};
pub use lanes::LaneTable;
pub use list::{GraphCommitList, GraphRow};
pub use log::{load_log, Log, LogOptions};
pub use walk::{walk, walk_with_cache, WalkRequest};

/// Errors from building a commit graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A ref target or parent could not be resolved during the walk.
    #[error("failed to resolve commit {id}")]
    ResolveCommit {
        /// The commit that could not be resolved
        id: Oid,
        /// The underlying repository error
        #[source]
        source: GitError,
    },

    /// Reading the walk inputs from the repository failed.
    #[error(transparent)]
    Source(#[from] GitError),
}
