//! git::interface
//!
//! Repository access through git2.
//!
//! # Architecture
//!
//! [`Git`] is the only type that touches `git2`. It turns git2 objects into
//! the plain [`Commit`] and [`RefTip`] values the graph walk consumes and
//! normalizes git2 errors into [`GitError`] categories.
//!
//! # Error Handling
//!
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::ObjectNotFound`]: Commit id unknown to the object database
//! - [`GitError::RefNotFound`]: Requested ref does not exist
//! - [`GitError::Internal`]: Anything else git2 reports
//!
//! # Example
//!
//! ```ignore
//! use lanegraph::git::{CommitSource, Git};
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! if let Some(head) = git.head_commit()? {
//!     println!("HEAD is {} {}", head.id.short(7), head.short_message);
//! }
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, trace};

use super::CommitSource;
use crate::core::types::{Oid, RefName, TypeError};
use crate::graph::{Commit, RefTip, Signature};

/// Name of the ref whose reflog holds the stash entries.
const STASH_REF: &str = "refs/stash";

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Requested ref does not exist.
    #[error("ref not found: {refname}")]
    RefNotFound {
        /// The ref that was not found
        refname: String,
    },

    /// Object not found in repository.
    #[error("object not found: {oid}")]
    ObjectNotFound {
        /// The OID that was not found
        oid: String,
    },

    /// Invalid object id format.
    #[error("invalid object id: {oid}")]
    InvalidOid {
        /// The invalid OID string
        oid: String,
    },

    /// Invalid ref name format.
    #[error("invalid ref name: {message}")]
    InvalidRefName {
        /// Description of the problem
        message: String,
    },

    /// Permission or filesystem error.
    #[error("repository access error: {message}")]
    AccessError {
        /// Description of the error
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error, naming what was being read.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound => {
                if context.starts_with("refs/") || context == "HEAD" {
                    GitError::RefNotFound {
                        refname: context.to_string(),
                    }
                } else {
                    GitError::ObjectNotFound {
                        oid: context.to_string(),
                    }
                }
            }
            git2::ErrorCode::InvalidSpec => GitError::InvalidOid {
                oid: context.to_string(),
            },
            git2::ErrorCode::Locked => GitError::AccessError {
                message: format!("repository is locked: {}", err.message()),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound => GitError::RefNotFound {
                refname: err.message().to_string(),
            },
            git2::ErrorCode::InvalidSpec => GitError::InvalidOid {
                oid: err.message().to_string(),
            },
            _ => GitError::Internal {
                message: err.message().to_string(),
            },
        }
    }
}

impl From<TypeError> for GitError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidOid(msg) => GitError::InvalidOid { oid: msg },
            TypeError::InvalidRefName(msg) => GitError::InvalidRefName { message: msg },
        }
    }
}

/// A repository opened for reading.
///
/// Implements [`CommitSource`] so the graph walk can run against a real
/// repository. Nothing here writes to the repository.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening and Info
    // =========================================================================

    /// Open the repository containing `path`.
    ///
    /// Uses `git2::Repository::discover`, so `path` can be any directory
    /// inside the repository. Bare repositories are accepted; they simply
    /// never report uncommitted changes.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;
        debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    /// Path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    // =========================================================================
    // Commit Conversion
    // =========================================================================

    fn find_commit(&self, oid: &Oid) -> Result<git2::Commit<'_>, GitError> {
        let git_oid =
            git2::Oid::from_str(oid.as_str()).map_err(|e| GitError::from_git2(e, oid.as_str()))?;
        self.repo
            .find_commit(git_oid)
            .map_err(|e| GitError::from_git2(e, oid.as_str()))
    }

    fn convert_commit(commit: &git2::Commit<'_>) -> Result<Commit, GitError> {
        let author = commit.author();
        let time = DateTime::from_timestamp(author.when().seconds(), 0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        let parents = commit
            .parent_ids()
            .map(|id| Oid::new(id.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Commit {
            id: Oid::new(commit.id().to_string())?,
            short_message: commit.summary().unwrap_or("").to_string(),
            full_message: commit.message().unwrap_or("").to_string(),
            author: Signature {
                name: author.name().unwrap_or("").to_string(),
                email: author.email().unwrap_or("").to_string(),
                time,
            },
            committer_time: commit.committer().when().seconds(),
            parents,
        })
    }
}

impl CommitSource for Git {
    fn resolve_commit(&self, id: &Oid) -> Result<Commit, GitError> {
        let commit = self.find_commit(id)?;
        Self::convert_commit(&commit)
    }

    fn head_commit(&self) -> Result<Option<Commit>, GitError> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                return Ok(None)
            }
            Err(e) => return Err(GitError::from_git2(e, "HEAD")),
        };

        let commit = head
            .peel_to_commit()
            .map_err(|e| GitError::from_git2(e, "HEAD"))?;
        Self::convert_commit(&commit).map(Some)
    }

    fn list_ref_tips(&self) -> Result<Vec<RefTip>, GitError> {
        let refs = self
            .repo
            .references()
            .map_err(|e| GitError::from_git2(e, "refs"))?;

        let mut tips = Vec::new();
        for reference in refs {
            let reference = reference?;

            // Skip refs with non-UTF8 names
            let Some(name) = reference.name() else {
                continue;
            };
            if name == STASH_REF {
                continue;
            }
            let Ok(name) = RefName::new(name) else {
                trace!(name, "skipping ref with invalid name");
                continue;
            };

            // Refs to trees or blobs have no place in a commit graph
            let Ok(commit) = reference.peel_to_commit() else {
                trace!(name = %name, "skipping ref that does not point at a commit");
                continue;
            };

            tips.push(RefTip::new(name, Oid::new(commit.id().to_string())?));
        }

        tips.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tips)
    }

    fn list_stash_tips(&self) -> Result<Vec<Commit>, GitError> {
        match self.repo.find_reference(STASH_REF) {
            Ok(_) => {}
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(GitError::from_git2(e, STASH_REF)),
        }

        let reflog = self
            .repo
            .reflog(STASH_REF)
            .map_err(|e| GitError::from_git2(e, STASH_REF))?;

        // Reflog entry 0 is the newest stash, matching `stash@{0}`
        reflog
            .iter()
            .map(|entry| {
                let id = Oid::new(entry.id_new().to_string())?;
                self.resolve_commit(&id)
            })
            .collect()
    }

    fn has_uncommitted_changes(&self) -> Result<bool, GitError> {
        if self.repo.is_bare() {
            return Ok(false);
        }

        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(false)
            .include_ignored(false);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(|e| GitError::Internal {
                message: e.message().to_string(),
            })?;

        Ok(!statuses.is_empty())
    }
}
