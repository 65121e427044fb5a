//! Stash entries
//!
//! A stash is recorded as a commit whose tree holds the stashed workspace.
//! Its parents are, in order:
//!
//! - the commit HEAD pointed to when stashing (the base)
//! - a commit holding the index state
//! - optionally, a root commit holding untracked files
//!
//! Entries are listed from the `logs/refs/stash` reflog, newest last.

use crate::artifacts::objects::object_id::ObjectId;

/// Reference holding the most recent stash
pub const STASH_REF_NAME: &str = "refs/stash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stash {
    pub main: ObjectId,
    pub base: ObjectId,
    pub index: Option<ObjectId>,
    pub untracked: Option<ObjectId>,
    pub message: String,
}

impl Stash {
    pub fn try_from_parents(
        main: ObjectId,
        parents: Vec<ObjectId>,
        message: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let mut parents = parents.into_iter();
        let base = parents
            .next()
            .ok_or_else(|| anyhow::anyhow!("stash commit {} has no parent", main.to_short_oid()))?;

        Ok(Stash {
            main,
            base,
            index: parents.next(),
            untracked: parents.next(),
            message: message.into(),
        })
    }
}

/// One line of a reflog: `<old> <new> <who> <when>\t<message>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflogEntry {
    pub old_oid: ObjectId,
    pub new_oid: ObjectId,
    pub message: String,
}

impl TryFrom<&str> for ReflogEntry {
    type Error = anyhow::Error;

    fn try_from(line: &str) -> anyhow::Result<Self> {
        let (header, message) = line.split_once('\t').unwrap_or((line, ""));
        let mut fields = header.split(' ');

        let old_oid = fields
            .next()
            .ok_or_else(|| anyhow::anyhow!("reflog line is missing the old object id"))?;
        let new_oid = fields
            .next()
            .ok_or_else(|| anyhow::anyhow!("reflog line is missing the new object id"))?;

        Ok(ReflogEntry {
            old_oid: ObjectId::try_parse(old_oid.to_string())?,
            new_oid: ObjectId::try_parse(new_oid.to_string())?,
            message: message.trim_end().to_string(),
        })
    }
}
