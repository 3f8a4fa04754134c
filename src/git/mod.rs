//! git
//!
//! Read-only access to commit data.
//!
//! # Architecture
//!
//! The graph walk only sees the [`CommitSource`] trait. [`Git`] implements it
//! over a real repository and is the only code that imports `git2`;
//! [`mock::MockRepo`] implements it in memory for tests.
//!
//! # Invariants
//!
//! - Nothing in this module writes to a repository
//! - All operations return strong types (Oid, RefName)
//!
//! # Example
//!
//! ```ignore
//! use lanegraph::git::{CommitSource, Git};
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! for tip in git.list_ref_tips()? {
//!     println!("{} -> {}", tip.short_name(), tip.target.short(7));
//! }
//! ```

mod interface;
pub mod mock;
mod source;

pub use interface::{Git, GitError};
pub use source::CommitSource;
