//! graph::log
//!
//! Builds the commit log of a repository: gathers HEAD, refs, stashes and
//! worktree state from a [`CommitSource`] and hands them to the walk.

use serde::Serialize;
use tracing::debug;

use super::commit::RefKind;
use super::list::GraphCommitList;
use super::walk::{walk, WalkRequest};
use super::GraphError;
use crate::git::CommitSource;

/// Options for [`load_log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    /// Maximum number of rows
    pub limit: Option<usize>,
    /// Ask the source for uncommitted changes
    pub show_uncommitted: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            limit: None,
            show_uncommitted: true,
        }
    }
}

/// A repository's commit graph plus worktree state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Log {
    /// The lane-annotated rows
    pub graph: GraphCommitList,
    /// Whether lane 0 was reserved for an uncommitted-changes marker
    pub has_uncommitted_changes: bool,
}

/// Load the commit graph reachable from HEAD, refs and stash entries.
///
/// An unborn HEAD yields an empty graph.
///
/// # Errors
///
/// - [`GraphError::Source`] if HEAD, refs, stashes or status cannot be read
/// - [`GraphError::ResolveCommit`] if the walk hits an unresolvable commit
pub fn load_log<S: CommitSource + ?Sized>(
    source: &S,
    options: LogOptions,
) -> Result<Log, GraphError> {
    let Some(root) = source.head_commit()? else {
        debug!("HEAD is unborn; empty log");
        return Ok(Log {
            graph: GraphCommitList::empty(),
            has_uncommitted_changes: false,
        });
    };

    let refs: Vec<_> = source
        .list_ref_tips()?
        .into_iter()
        .filter(|tip| !tip.name.is_stash_ref() && tip.kind() != RefKind::Head)
        .collect();
    let stashes = source.list_stash_tips()?;
    let has_uncommitted_changes = options.show_uncommitted && source.has_uncommitted_changes()?;

    debug!(
        refs = refs.len(),
        stashes = stashes.len(),
        uncommitted = has_uncommitted_changes,
        "log inputs gathered"
    );

    let graph = walk(
        source,
        WalkRequest {
            root,
            refs,
            stashes,
            has_uncommitted_changes,
            limit: options.limit,
        },
    )?;

    Ok(Log {
        graph,
        has_uncommitted_changes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::MockRepo;

    #[test]
    fn unborn_head_is_empty() {
        let mut repo = MockRepo::new();
        repo.set_dirty(true);

        let log = load_log(&repo, LogOptions::default()).unwrap();
        assert!(log.graph.is_empty());
        assert_eq!(log.graph.max_lane(), 0);
        assert!(!log.has_uncommitted_changes);
    }

    #[test]
    fn walks_from_head_refs_and_stashes() {
        let mut repo = MockRepo::new();
        let a = repo.commit("a", 1, &[]);
        let b = repo.commit("b", 2, &[&a]);
        let side = repo.commit("side", 3, &[&a]);
        repo.branch("main", &b);
        repo.branch("side", &side);
        repo.set_head(&b);
        repo.stash("main", "wip", 4, &b, false);

        let log = load_log(&repo, LogOptions::default()).unwrap();

        // stash, side, b, a
        assert_eq!(log.graph.len(), 4);
        assert!(log.graph.rows()[0].is_stash);
        assert!(!log.has_uncommitted_changes);
    }

    #[test]
    fn stash_ref_is_not_a_label() {
        let mut repo = MockRepo::new();
        let a = repo.commit("a", 1, &[]);
        repo.set_head(&a);
        let stash = repo.stash("main", "wip", 2, &a, false);
        repo.add_ref("refs/stash", &stash);

        let log = load_log(&repo, LogOptions::default()).unwrap();
        assert!(log.graph.iter().all(|row| row.refs.is_empty()));
    }

    #[test]
    fn uncommitted_changes_follow_options() {
        let mut repo = MockRepo::new();
        let a = repo.commit("a", 1, &[]);
        repo.set_head(&a);
        repo.set_dirty(true);

        let shown = load_log(&repo, LogOptions::default()).unwrap();
        assert!(shown.has_uncommitted_changes);

        let hidden = load_log(
            &repo,
            LogOptions {
                limit: None,
                show_uncommitted: false,
            },
        )
        .unwrap();
        assert!(!hidden.has_uncommitted_changes);
    }

    #[test]
    fn limit_is_forwarded() {
        let mut repo = MockRepo::new();
        let a = repo.commit("a", 1, &[]);
        let b = repo.commit("b", 2, &[&a]);
        repo.set_head(&b);

        let log = load_log(
            &repo,
            LogOptions {
                limit: Some(1),
                show_uncommitted: true,
            },
        )
        .unwrap();
        assert_eq!(log.graph.len(), 1);
    }
}
