//! ui::render
//!
//! Plain-text rendering of a commit graph, one line per row.
//!
//! Each row starts with one cell per lane:
//!
//! | Cell | Meaning                                   |
//! |------|-------------------------------------------|
//! | `*`  | the commit node                           |
//! | `s`  | a stash entry node                        |
//! | `\|` | a passing lane                            |
//! | `/`  | a forking lane ending at this row         |
//! | `\`  | a merging lane opened by this row         |
//!
//! # Example
//!
//! ```text
//! *    (uncommitted changes)
//! * \  3f2a1bc (main) Merge branch 'feature'
//! | *  9e0d4aa (feature) Add feature
//! * |  41cc2d0 Fix typo
//! * /  07b9e13 Initial commit
//! ```

use crate::graph::{GraphRow, Log, RefKind, RefTip};

/// Number of hex digits shown per commit id.
pub const SHORT_ID_LEN: usize = 7;

const UNCOMMITTED_LABEL: &str = "(uncommitted changes)";

/// Render a whole log, newest row first.
pub fn render_log(log: &Log) -> String {
    let width = log.graph.width().max(1);
    let mut out = String::new();

    if log.has_uncommitted_changes {
        out.push_str(&lane_cells(width, |lane| if lane == 0 { '*' } else { ' ' }));
        out.push_str("  ");
        out.push_str(UNCOMMITTED_LABEL);
        out.push('\n');
    }

    for row in log.graph.iter() {
        out.push_str(&render_row(row, width));
        out.push('\n');
    }
    out
}

/// Render one row against a graph `width` lanes wide.
pub fn render_row(row: &GraphRow, width: usize) -> String {
    let node = if row.is_stash { 's' } else { '*' };
    let cells = lane_cells(width, |lane| {
        if lane == row.lane {
            node
        } else if row.forking_lanes.contains(&lane) {
            '/'
        } else if row.merging_lanes.contains(&lane) {
            '\\'
        } else if row.passing_lanes.contains(&lane) {
            '|'
        } else {
            ' '
        }
    });

    let mut line = format!("{}  {}", cells, row.id.short(SHORT_ID_LEN));
    if !row.refs.is_empty() {
        line.push_str(&format!(" ({})", ref_labels(&row.refs)));
    }
    if !row.short_message.is_empty() {
        line.push(' ');
        line.push_str(&row.short_message);
    }
    line
}

/// Comma-separated ref decorations, `git log --decorate` style.
pub fn ref_labels(refs: &[RefTip]) -> String {
    refs.iter()
        .map(|tip| match tip.kind() {
            RefKind::Tag => format!("tag: {}", tip.short_name()),
            _ => tip.short_name().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn lane_cells(width: usize, cell: impl Fn(usize) -> char) -> String {
    let mut cells = String::with_capacity(width * 2);
    for lane in 0..width {
        if lane > 0 {
            cells.push(' ');
        }
        cells.push(cell(lane));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::MockRepo;
    use crate::graph::{load_log, LogOptions};

    fn lines(log: &Log) -> Vec<String> {
        render_log(log).lines().map(str::to_string).collect()
    }

    #[test]
    fn linear_history() {
        let mut repo = MockRepo::new();
        let a = repo.commit("Initial commit", 1, &[]);
        let b = repo.commit("Second", 2, &[&a]);
        repo.branch("main", &b);
        repo.tag("v1", &a);
        repo.set_head(&b);

        let log = load_log(&repo, LogOptions::default()).unwrap();
        let out = lines(&log);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], format!("*  {} (main) Second", b.short(7)));
        assert_eq!(out[1], format!("*  {} (tag: v1) Initial commit", a.short(7)));
    }

    #[test]
    fn merge_draws_all_lane_kinds() {
        let mut repo = MockRepo::new();
        let a = repo.commit("a", 1, &[]);
        let b = repo.commit("b", 2, &[&a]);
        let f = repo.commit("f", 3, &[&a]);
        let m = repo.commit("m", 4, &[&b, &f]);
        repo.set_head(&m);

        let log = load_log(&repo, LogOptions::default()).unwrap();
        let graph: Vec<String> = lines(&log).iter().map(|l| l[..3].to_string()).collect();

        assert_eq!(graph, vec!["* \\", "| *", "* |", "* /"]);
    }

    #[test]
    fn closing_fork_and_new_merge_on_one_row() {
        let mut repo = MockRepo::new();
        let a = repo.commit("a", 1, &[]);
        let s1 = repo.commit("s1", 2, &[&a]);
        let b = repo.commit("b", 3, &[&a, &s1]);
        let s2 = repo.commit("s2", 4, &[&b]);
        let c = repo.commit("c", 5, &[&b, &s2]);
        repo.set_head(&c);

        let log = load_log(&repo, LogOptions::default()).unwrap();
        let graph: Vec<String> = lines(&log).iter().map(|l| l[..5].to_string()).collect();

        assert_eq!(graph, vec!["* \\  ", "* |  ", "* / \\", "*   |", "*   /"]);
    }

    #[test]
    fn stash_and_uncommitted_markers() {
        let mut repo = MockRepo::new();
        let a = repo.commit("a", 1, &[]);
        repo.set_head(&a);
        repo.set_dirty(true);
        repo.stash("main", "wip", 2, &a, false);

        let log = load_log(&repo, LogOptions::default()).unwrap();
        let out = lines(&log);

        // HEAD keeps lane 0 under the marker; the stash opens lane 1.
        assert_eq!(out[0], "*    (uncommitted changes)");
        assert!(out[1].starts_with("| s  "));
        assert!(out[1].ends_with("On main: wip"));
        assert!(out[2].starts_with("* /  "));
    }

    #[test]
    fn empty_log_renders_nothing() {
        let repo = MockRepo::new();
        let log = load_log(&repo, LogOptions::default()).unwrap();
        assert!(render_log(&log).is_empty());
    }
}
