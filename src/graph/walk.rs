//! graph::walk
//!
//! Best-first walk that turns a commit DAG into lane-annotated rows.
//!
//! # Algorithm
//!
//! The frontier starts with the root commit and every ref and stash tip.
//! Each step pops the newest pending commit and:
//!
//! 1. Looks up every lane waiting for it. The smallest is the row's lane;
//!    the others are forking lanes that end here.
//! 2. Resolves and orders its parents (stash bookkeeping parents removed).
//! 3. Hands the row's lane to the first parent, opens a new lane for every
//!    further parent, then frees the lanes still waiting for the commit.
//! 4. Queues the parents and emits the row.
//!
//! # Invariants
//!
//! - Every commit reachable from the seeds is emitted at most once
//! - No lane waits for a commit that has already been emitted
//! - A row's forking and merging lanes never overlap
//! - All walk state is owned by one call and dropped on return

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, debug_span, trace};

use super::cache::CommitCache;
use super::commit::{Commit, RefTip};
use super::frontier::Frontier;
use super::lanes::LaneTable;
use super::list::{GraphCommitList, GraphRow};
use super::parents::{filter_stash_parents, prioritize};
use super::GraphError;
use crate::core::types::Oid;
use crate::git::CommitSource;

/// Inputs of one graph walk.
#[derive(Debug, Clone)]
pub struct WalkRequest {
    /// The commit the graph is anchored at (usually HEAD)
    pub root: Commit,
    /// Ref tips to seed the walk with
    pub refs: Vec<RefTip>,
    /// Stash entries to seed the walk with
    pub stashes: Vec<Commit>,
    /// Reserve lane 0 for the root before the first row
    pub has_uncommitted_changes: bool,
    /// Maximum number of rows to emit
    pub limit: Option<usize>,
}

impl WalkRequest {
    /// A request seeded with the root only.
    pub fn new(root: Commit) -> Self {
        Self {
            root,
            refs: Vec::new(),
            stashes: Vec::new(),
            has_uncommitted_changes: false,
            limit: None,
        }
    }
}

/// Walk the commit graph reachable from the request's seeds.
///
/// # Errors
///
/// Returns [`GraphError::ResolveCommit`] if a ref target or parent cannot be
/// resolved. No partial list is returned.
///
/// # Example
///
/// ```
/// use lanegraph::git::mock::MockRepo;
/// use lanegraph::git::CommitSource;
/// use lanegraph::graph::{walk, WalkRequest};
///
/// let mut repo = MockRepo::new();
/// let a = repo.commit("a", 1, &[]);
/// let b = repo.commit("b", 2, &[&a]);
///
/// let root = repo.resolve_commit(&b).unwrap();
/// let list = walk(&repo, WalkRequest::new(root)).unwrap();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.max_lane(), 0);
/// ```
pub fn walk<S: CommitSource + ?Sized>(
    source: &S,
    request: WalkRequest,
) -> Result<GraphCommitList, GraphError> {
    let mut cache = CommitCache::new(source);
    walk_with_cache(&mut cache, request)
}

/// Walk the commit graph using a caller-provided commit cache.
///
/// The cache may already hold commits; lookups missing from it go to the
/// cache's source.
pub fn walk_with_cache<S: CommitSource + ?Sized>(
    cache: &mut CommitCache<'_, S>,
    request: WalkRequest,
) -> Result<GraphCommitList, GraphError> {
    if request.limit == Some(0) {
        return Ok(GraphCommitList::empty());
    }

    let span = debug_span!(
        "walk",
        root = %request.root.id.short(7),
        refs = request.refs.len(),
        stashes = request.stashes.len(),
        limit = ?request.limit,
    );
    let _guard = span.enter();

    let limit = request.limit;
    let mut state = WalkState::seed(cache, request)?;

    while limit.map_or(true, |max| state.rows.len() < max) {
        let Some(commit) = state.frontier.pop() else {
            break;
        };
        let row = state.step(commit)?;
        state.rows.push(row);
    }

    debug!(
        rows = state.rows.len(),
        max_lane = state.max_lane,
        pending = state.frontier.len(),
        "walk finished"
    );

    Ok(GraphCommitList::new(state.rows, state.max_lane))
}

/// Mutable state owned by one walk.
struct WalkState<'c, 'a, S: CommitSource + ?Sized> {
    cache: &'c mut CommitCache<'a, S>,
    frontier: Frontier,
    lanes: LaneTable,
    emitted: HashSet<Oid>,
    stashes: HashSet<Oid>,
    refs_by_target: HashMap<Oid, Vec<RefTip>>,
    rows: Vec<GraphRow>,
    max_lane: usize,
}

impl<'c, 'a, S: CommitSource + ?Sized> WalkState<'c, 'a, S> {
    /// Build the initial state: frontier seeded, lane 0 reserved if needed.
    fn seed(cache: &'c mut CommitCache<'a, S>, request: WalkRequest) -> Result<Self, GraphError> {
        let mut frontier = Frontier::new();
        let mut lanes = LaneTable::new();

        let root = cache.insert(request.root);
        if request.has_uncommitted_changes {
            lanes.reserve(0, root.id.clone());
        }
        frontier.push(root);

        let mut refs_by_target: HashMap<Oid, Vec<RefTip>> = HashMap::new();
        for tip in request.refs {
            let commit = cache.get(&tip.target)?;
            frontier.push(commit);
            refs_by_target.entry(tip.target.clone()).or_default().push(tip);
        }

        let mut stashes = HashSet::new();
        for stash in request.stashes {
            stashes.insert(stash.id.clone());
            frontier.push(cache.insert(stash));
        }

        Ok(Self {
            cache,
            frontier,
            lanes,
            emitted: HashSet::new(),
            stashes,
            refs_by_target,
            rows: Vec::new(),
            max_lane: 0,
        })
    }

    /// Emit one commit: assign lanes, queue parents, build the row.
    fn step(&mut self, commit: Arc<Commit>) -> Result<GraphRow, GraphError> {
        let reserved = self.lanes.reserved_lanes(&commit.id);
        let lane = reserved[0];
        let forking_lanes = reserved[1..].to_vec();
        let is_stash = self.stashes.contains(&commit.id);

        let mut parents = self.cache.parents(&commit)?;
        if is_stash {
            parents = filter_stash_parents(parents);
        }
        let parents = self.pending_parents(&commit, prioritize(parents));

        if let Some(first) = parents.first() {
            self.lanes.reserve(lane, first.id.clone());
        }

        // Forking lanes still await this commit here, so a merge never
        // lands on a lane that closes on the same row.
        let mut merging_lanes = Vec::new();
        for parent in parents.iter().skip(1) {
            let merge_lane = self.lanes.first_free_lane();
            self.lanes.reserve(merge_lane, parent.id.clone());
            merging_lanes.push(merge_lane);
        }
        self.lanes.release(&commit.id);

        let passing_lanes: Vec<usize> = self
            .lanes
            .occupied_lanes()
            .filter(|l| *l != lane && !forking_lanes.contains(l) && !merging_lanes.contains(l))
            .collect();

        trace!(lanes = ?self.lanes, "lane table updated");

        self.max_lane = merging_lanes
            .iter()
            .copied()
            .chain(std::iter::once(lane))
            .fold(self.max_lane, usize::max);

        for parent in parents {
            self.frontier.push(parent);
        }
        self.emitted.insert(commit.id.clone());

        debug!(
            commit = %commit.id.short(7),
            lane,
            forking = ?forking_lanes,
            merging = ?merging_lanes,
            passing = ?passing_lanes,
            "row emitted"
        );

        Ok(GraphRow {
            id: commit.id.clone(),
            short_message: commit.short_message.clone(),
            full_message: commit.full_message.clone(),
            author: commit.author.clone(),
            committer_time: commit.committer_time,
            parent_count: commit.parents.len(),
            is_stash,
            lane,
            forking_lanes,
            merging_lanes,
            passing_lanes,
            refs: self.refs_by_target.remove(&commit.id).unwrap_or_default(),
        })
    }

    /// Drop parents that were already emitted.
    ///
    /// Only happens when a parent's timestamp is newer than its child's and
    /// another path reached it first. Giving it a lane would leave that lane
    /// waiting forever.
    fn pending_parents(&self, commit: &Commit, parents: Vec<Arc<Commit>>) -> Vec<Arc<Commit>> {
        parents
            .into_iter()
            .filter(|parent| {
                let done = self.emitted.contains(&parent.id);
                if done {
                    debug!(
                        commit = %commit.id.short(7),
                        parent = %parent.id.short(7),
                        "parent already emitted; committer timestamps out of order"
                    );
                }
                !done
            })
            .collect()
    }
}
