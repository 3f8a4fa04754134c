//! graph::lanes
//!
//! Lane allocation for the graph walk.
//!
//! A lane is a column in the rendered graph. The [`LaneTable`] records, for
//! every occupied lane, the commit that lane is waiting for. When that commit
//! is emitted the lane either continues into one of its parents or is freed
//! for reuse.
//!
//! # Invariants
//!
//! - At most one awaited commit per lane
//! - Several lanes may await the same commit (converging history)
//! - Freed lanes are recycled smallest-first

use std::collections::BTreeMap;

use crate::core::types::Oid;

/// Mapping from lane index to the commit that lane is waiting for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneTable {
    lanes: BTreeMap<usize, Oid>,
}

impl LaneTable {
    /// Create an empty lane table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `lane` wait for `id`, replacing any previous occupant.
    pub fn reserve(&mut self, lane: usize, id: Oid) {
        self.lanes.insert(lane, id);
    }

    /// Free every lane waiting for `id`.
    pub fn release(&mut self, id: &Oid) {
        self.lanes.retain(|_, awaited| awaited != id);
    }

    /// The smallest lane index not currently occupied.
    ///
    /// Scans the occupied indices in ascending order with a candidate
    /// starting at zero: an index equal to the candidate advances it, the
    /// first index beyond it ends the scan. Without a gap the result is one
    /// past the highest occupied lane.
    ///
    /// # Example
    ///
    /// ```
    /// use lanegraph::graph::LaneTable;
    /// # use lanegraph::core::types::Oid;
    /// # let a = Oid::new("a".repeat(40)).unwrap();
    ///
    /// let mut table = LaneTable::new();
    /// assert_eq!(table.first_free_lane(), 0);
    ///
    /// table.reserve(1, a.clone());
    /// assert_eq!(table.first_free_lane(), 0);
    ///
    /// table.reserve(0, a);
    /// assert_eq!(table.first_free_lane(), 2);
    /// ```
    pub fn first_free_lane(&self) -> usize {
        let mut candidate = 0;
        for &lane in self.lanes.keys() {
            if lane == candidate {
                candidate += 1;
            } else if lane > candidate {
                break;
            }
        }
        candidate
    }

    /// Every lane waiting for `id`, ascending.
    ///
    /// A commit nobody is waiting for starts a new lane, so the result is
    /// never empty: without a reservation it is `[first_free_lane()]`.
    pub fn reserved_lanes(&self, id: &Oid) -> Vec<usize> {
        let lanes: Vec<usize> = self
            .lanes
            .iter()
            .filter(|(_, awaited)| *awaited == id)
            .map(|(&lane, _)| lane)
            .collect();

        if lanes.is_empty() {
            vec![self.first_free_lane()]
        } else {
            lanes
        }
    }

    /// Occupied lane indices, ascending.
    pub fn occupied_lanes(&self) -> impl Iterator<Item = usize> + '_ {
        self.lanes.keys().copied()
    }

    /// The commit `lane` is waiting for, if any.
    pub fn awaited(&self, lane: usize) -> Option<&Oid> {
        self.lanes.get(&lane)
    }

    /// Number of occupied lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Check if no lane is occupied.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

impl FromIterator<(usize, Oid)> for LaneTable {
    fn from_iter<I: IntoIterator<Item = (usize, Oid)>>(iter: I) -> Self {
        Self {
            lanes: iter.into_iter().collect(),
        }
    }
}
