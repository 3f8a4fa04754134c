//! graph::list
//!
//! The walk's output: one row per emitted commit plus the lane width.

use serde::{Deserialize, Serialize};

use super::commit::{RefTip, Signature};
use crate::core::types::Oid;

/// One rendered row of the commit graph.
///
/// Carries everything a renderer needs to draw the row's lane lines and a
/// labelled node without further graph computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRow {
    /// The commit OID
    pub id: Oid,
    /// First line of the commit message
    pub short_message: String,
    /// Full commit message
    pub full_message: String,
    /// Author identity
    pub author: Signature,
    /// Committer timestamp (seconds since the epoch)
    pub committer_time: i64,
    /// Number of parents recorded in the commit
    pub parent_count: usize,
    /// Whether the commit is a stash entry
    pub is_stash: bool,
    /// Lane the commit node sits on
    pub lane: usize,
    /// Other lanes that end at this row
    pub forking_lanes: Vec<usize>,
    /// Lanes opened by this row's extra parents
    pub merging_lanes: Vec<usize>,
    /// Lanes that run through this row untouched
    pub passing_lanes: Vec<usize>,
    /// Refs pointing at this commit
    pub refs: Vec<RefTip>,
}

/// Ordered rows of a commit graph.
///
/// Rows are appended in emission order and never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphCommitList {
    rows: Vec<GraphRow>,
    max_lane: usize,
}

impl GraphCommitList {
    /// Create an empty list (`max_lane == 0`).
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(rows: Vec<GraphRow>, max_lane: usize) -> Self {
        Self { rows, max_lane }
    }

    /// The rows in emission order.
    pub fn rows(&self) -> &[GraphRow] {
        &self.rows
    }

    /// Highest lane index used by any row.
    pub fn max_lane(&self) -> usize {
        self.max_lane
    }

    /// Number of lane columns needed to draw the graph.
    pub fn width(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.max_lane + 1
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, GraphRow> {
        self.rows.iter()
    }

    /// Row at `index`.
    pub fn get(&self, index: usize) -> Option<&GraphRow> {
        self.rows.get(index)
    }

    /// Index of the row for `id`.
    pub fn position(&self, id: &Oid) -> Option<usize> {
        self.rows.iter().position(|row| &row.id == id)
    }
}

impl<'a> IntoIterator for &'a GraphCommitList {
    type Item = &'a GraphRow;
    type IntoIter = std::slice::Iter<'a, GraphRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
