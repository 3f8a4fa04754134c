//! graph::parents
//!
//! Parent ordering for lane continuation.
//!
//! The first parent returned by [`prioritize`] continues the lane of the
//! commit being emitted; every other parent opens a new lane. The ordering
//! rules are heuristics: there is no reliable way to tell which side of a
//! merge is the mainline without further reachability analysis, so the
//! ambiguous cases keep the recorded order.

use std::sync::Arc;

use super::commit::Commit;

/// Short-message prefixes of the bookkeeping commits `git stash` creates.
const SYNTHETIC_STASH_PREFIXES: [&str; 2] = ["index on", "untracked files on"];

/// Order parents so the lane-continuing parent comes first.
///
/// - Zero or one parent: unchanged.
/// - Two parents `[a, b]`: swapped when `a` is a direct parent of `b`,
///   otherwise kept as recorded.
/// - Three or more (octopus): oldest committer timestamp first; equal
///   timestamps keep their recorded order.
pub fn prioritize(mut parents: Vec<Arc<Commit>>) -> Vec<Arc<Commit>> {
    match parents.len() {
        0 | 1 => parents,
        2 => {
            if parents[1].has_parent(&parents[0].id) {
                parents.swap(0, 1);
            }
            parents
        }
        _ => {
            parents.sort_by_key(|p| p.committer_time);
            parents
        }
    }
}

/// Check if a commit is one of the index / untracked-files commits created
/// alongside a stash entry.
pub fn is_synthetic_stash_parent(commit: &Commit) -> bool {
    SYNTHETIC_STASH_PREFIXES
        .iter()
        .any(|prefix| commit.short_message.starts_with(prefix))
}

/// Drop the synthetic bookkeeping parents of a stash entry.
///
/// Entries missing the expected parents simply keep what they have.
pub fn filter_stash_parents(parents: Vec<Arc<Commit>>) -> Vec<Arc<Commit>> {
    parents
        .into_iter()
        .filter(|p| !is_synthetic_stash_parent(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Oid;
    use crate::graph::commit::Signature;

    fn oid(c: char) -> Oid {
        Oid::new(c.to_string().repeat(40)).unwrap()
    }

    fn commit(c: char, message: &str, time: i64, parents: &[char]) -> Arc<Commit> {
        Arc::new(Commit {
            id: oid(c),
            short_message: message.to_string(),
            full_message: format!("{message}\n"),
            author: Signature {
                name: "Test User".into(),
                email: "test@example.com".into(),
                time: chrono::DateTime::UNIX_EPOCH,
            },
            committer_time: time,
            parents: parents.iter().map(|&p| oid(p)).collect(),
        })
    }

    fn ids(parents: &[Arc<Commit>]) -> Vec<Oid> {
        parents.iter().map(|p| p.id.clone()).collect()
    }

    mod prioritize {
        use super::*;

        #[test]
        fn empty_and_single_unchanged() {
            assert!(prioritize(vec![]).is_empty());

            let a = commit('a', "a", 1, &[]);
            assert_eq!(ids(&prioritize(vec![a])), vec![oid('a')]);
        }

        #[test]
        fn first_is_parent_of_second_swaps() {
            let a = commit('a', "a", 1, &[]);
            let b = commit('b', "b", 2, &['a']);
            assert_eq!(ids(&prioritize(vec![a, b])), vec![oid('b'), oid('a')]);
        }

        #[test]
        fn second_is_parent_of_first_keeps() {
            let b = commit('b', "b", 1, &[]);
            let a = commit('a', "a", 2, &['b']);
            assert_eq!(ids(&prioritize(vec![a, b])), vec![oid('a'), oid('b')]);
        }

        #[test]
        fn unrelated_keeps_recorded_order() {
            let a = commit('a', "a", 5, &['c']);
            let b = commit('b', "b", 9, &['d']);
            assert_eq!(ids(&prioritize(vec![a, b])), vec![oid('a'), oid('b')]);
        }

        #[test]
        fn octopus_sorted_oldest_first() {
            let a = commit('a', "a", 30, &[]);
            let b = commit('b', "b", 10, &[]);
            let c = commit('c', "c", 20, &[]);
            assert_eq!(
                ids(&prioritize(vec![a, b, c])),
                vec![oid('b'), oid('c'), oid('a')]
            );
        }

        #[test]
        fn octopus_ties_keep_recorded_order() {
            let a = commit('a', "a", 10, &[]);
            let b = commit('b', "b", 10, &[]);
            let c = commit('c', "c", 5, &[]);
            assert_eq!(
                ids(&prioritize(vec![a, b, c])),
                vec![oid('c'), oid('a'), oid('b')]
            );
        }
    }

    mod stash {
        use super::*;

        #[test]
        fn drops_index_and_untracked_parents() {
            let real = commit('a', "Add feature", 1, &[]);
            let index = commit('b', "index on main: aaaaaaa Add feature", 2, &['a']);
            let untracked = commit('c', "untracked files on main: aaaaaaa Add feature", 2, &[]);

            let filtered = filter_stash_parents(vec![real, index, untracked]);
            assert_eq!(ids(&filtered), vec![oid('a')]);
        }

        #[test]
        fn malformed_entry_keeps_parents() {
            let real = commit('a', "Add feature", 1, &[]);
            let filtered = filter_stash_parents(vec![real]);
            assert_eq!(ids(&filtered), vec![oid('a')]);
        }

        #[test]
        fn prefix_must_lead_the_message() {
            assert!(!is_synthetic_stash_parent(&commit('a', "Reindex on startup", 1, &[])));
            assert!(is_synthetic_stash_parent(&commit('a', "index on dev: x", 1, &[])));
        }
    }
}
