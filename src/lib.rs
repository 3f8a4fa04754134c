//! lanegraph - Lane-annotated commit graphs for Git repositories
//!
//! Given a repository, lanegraph walks every commit reachable from HEAD,
//! refs and stash entries, newest first, and assigns each commit a lane
//! (column) so the history can be drawn as parallel lines with forks and
//! merges.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, prints results)
//! - [`graph`] - The lane-assigning walk and its output
//! - [`git`] - Read-only commit source over git2, plus an in-memory mock
//! - [`core`] - Strong types and configuration
//! - [`ui`] - Text rendering and output helpers
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Correctness Invariants
//!
//! 1. Every commit reachable from the walk's seeds is emitted at most once
//! 2. Walks are deterministic: equal timestamps are ordered by commit id
//! 3. A walk shares no state with any other walk
//!
//! # Example
//!
//! ```
//! use lanegraph::git::mock::MockRepo;
//! use lanegraph::graph::{load_log, LogOptions};
//!
//! let mut repo = MockRepo::new();
//! let base = repo.commit("Initial commit", 1, &[]);
//! let feature = repo.commit("Add feature", 2, &[&base]);
//! let fix = repo.commit("Fix bug", 3, &[&base]);
//! let merge = repo.commit("Merge feature", 4, &[&fix, &feature]);
//! repo.branch("main", &merge);
//! repo.set_head(&merge);
//!
//! let log = load_log(&repo, LogOptions::default()).unwrap();
//! assert_eq!(log.graph.len(), 4);
//! assert_eq!(log.graph.max_lane(), 1);
//! assert_eq!(log.graph.rows()[0].merging_lanes, vec![1]);
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod graph;
pub mod logging;
pub mod ui;
