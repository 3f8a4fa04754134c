//! graph::commit
//!
//! Read-only commit and ref data consumed by the walk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{Oid, RefName};

/// Person and timestamp attached to a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// When the signature was made
    pub time: DateTime<Utc>,
}

/// A commit as seen by the graph walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit OID
    pub id: Oid,
    /// First line of the commit message
    pub short_message: String,
    /// Full commit message
    pub full_message: String,
    /// Author identity
    pub author: Signature,
    /// Committer timestamp in seconds since the epoch; orders the walk
    pub committer_time: i64,
    /// Parent OIDs in the order recorded in the commit
    pub parents: Vec<Oid>,
}

impl Commit {
    /// Check whether `id` is one of this commit's direct parents.
    pub fn has_parent(&self, id: &Oid) -> bool {
        self.parents.iter().any(|p| p == id)
    }
}

/// Category of a ref, derived from its namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    LocalBranch,
    RemoteBranch,
    Tag,
    Head,
    Other,
}

/// A ref bound to the commit it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefTip {
    /// The full ref name
    pub name: RefName,
    /// The commit the ref peels to
    pub target: Oid,
}

impl RefTip {
    /// Create a ref tip.
    pub fn new(name: RefName, target: Oid) -> Self {
        Self { name, target }
    }

    /// Categorize the ref by its namespace.
    pub fn kind(&self) -> RefKind {
        let name = self.name.as_str();
        if name == "HEAD" {
            RefKind::Head
        } else if name.starts_with("refs/heads/") {
            RefKind::LocalBranch
        } else if name.starts_with("refs/remotes/") {
            RefKind::RemoteBranch
        } else if name.starts_with("refs/tags/") {
            RefKind::Tag
        } else {
            RefKind::Other
        }
    }

    /// Short display name (`main`, `origin/main`, `v1.0`).
    pub fn short_name(&self) -> &str {
        self.name.short_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(c: char) -> Oid {
        Oid::new(c.to_string().repeat(40)).unwrap()
    }

    fn tip(name: &str) -> RefTip {
        RefTip::new(RefName::new(name).unwrap(), oid('a'))
    }

    #[test]
    fn ref_kinds() {
        assert_eq!(tip("refs/heads/main").kind(), RefKind::LocalBranch);
        assert_eq!(tip("refs/remotes/origin/main").kind(), RefKind::RemoteBranch);
        assert_eq!(tip("refs/tags/v1").kind(), RefKind::Tag);
        assert_eq!(tip("HEAD").kind(), RefKind::Head);
        assert_eq!(tip("refs/notes/commits").kind(), RefKind::Other);
    }

    #[test]
    fn has_parent() {
        let commit = Commit {
            id: oid('c'),
            short_message: "c".into(),
            full_message: "c\n".into(),
            author: Signature {
                name: "T".into(),
                email: "t@example.com".into(),
                time: DateTime::UNIX_EPOCH,
            },
            committer_time: 0,
            parents: vec![oid('a'), oid('b')],
        };
        assert!(commit.has_parent(&oid('b')));
        assert!(!commit.has_parent(&oid('d')));
    }
}
