//! graph::frontier
//!
//! Commits discovered but not yet emitted.
//!
//! The frontier is a max-heap keyed by `(committer_time, id)`, so the order
//! is total: the newest commit comes first and equal timestamps fall back to
//! the smallest id. Membership is tracked separately by id, which keeps a
//! commit reached through several paths queued exactly once.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::sync::Arc;

use super::commit::Commit;
use crate::core::types::Oid;

/// An entry in the frontier priority queue.
#[derive(Debug)]
struct FrontierEntry {
    commit: Arc<Commit>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: newest commit first, then smallest id.
        self.commit
            .committer_time
            .cmp(&other.commit.committer_time)
            .then_with(|| other.commit.id.cmp(&self.commit.id))
    }
}

/// Pending commits ordered for best-first emission.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: BinaryHeap<FrontierEntry>,
    queued: HashSet<Oid>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a commit.
    ///
    /// Returns `false` and keeps the existing entry if the commit is
    /// already queued.
    pub fn push(&mut self, commit: Arc<Commit>) -> bool {
        if !self.queued.insert(commit.id.clone()) {
            return false;
        }
        self.queue.push(FrontierEntry { commit });
        true
    }

    /// Remove and return the next commit to emit.
    pub fn pop(&mut self) -> Option<Arc<Commit>> {
        let entry = self.queue.pop()?;
        self.queued.remove(&entry.commit.id);
        Some(entry.commit)
    }

    /// Number of queued commits.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::commit::Signature;

    fn commit(c: char, time: i64) -> Arc<Commit> {
        Arc::new(Commit {
            id: Oid::new(c.to_string().repeat(40)).unwrap(),
            short_message: c.to_string(),
            full_message: c.to_string(),
            author: Signature {
                name: "Test User".into(),
                email: "test@example.com".into(),
                time: chrono::DateTime::UNIX_EPOCH,
            },
            committer_time: time,
            parents: vec![],
        })
    }

    fn drain(frontier: &mut Frontier) -> Vec<String> {
        std::iter::from_fn(|| frontier.pop())
            .map(|c| c.short_message.clone())
            .collect()
    }

    #[test]
    fn newest_first() {
        let mut frontier = Frontier::new();
        frontier.push(commit('a', 10));
        frontier.push(commit('b', 30));
        frontier.push(commit('c', 20));

        assert_eq!(drain(&mut frontier), vec!["b", "c", "a"]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn equal_timestamps_keep_every_entry_smallest_id_first() {
        let mut frontier = Frontier::new();
        frontier.push(commit('c', 10));
        frontier.push(commit('a', 10));
        frontier.push(commit('b', 10));

        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicate_push_is_ignored() {
        let mut frontier = Frontier::new();
        assert!(frontier.push(commit('a', 10)));
        assert!(!frontier.push(commit('a', 10)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn pop_clears_membership() {
        let mut frontier = Frontier::new();
        let a = commit('a', 10);
        frontier.push(a.clone());

        frontier.pop();
        assert!(frontier.is_empty());
        assert!(frontier.push(a));
    }
}
