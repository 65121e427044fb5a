//! Diff and blame requests
//!
//! The change models do not compute diffs or blame themselves. They describe
//! which two sides of a file to compare, or where annotation starts, and leave
//! the computation to the caller.

use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;

/// One side of a file diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffSide {
    /// The file does not exist on this side
    Empty,
    Commit(ObjectId),
    Index,
    Workspace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRequest {
    pub path: String,
    pub from: DiffSide,
    pub to: DiffSide,
}

impl DiffRequest {
    pub fn new(path: impl Into<String>, from: DiffSide, to: DiffSide) -> Self {
        DiffRequest {
            path: path.into(),
            from,
            to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlameStart {
    Commit(ObjectId),
    /// Annotate in-memory contents, such as the staged version of a file
    Contents(Bytes),
    Workspace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlameRequest {
    pub path: String,
    pub start: BlameStart,
}

impl BlameRequest {
    pub fn new(path: impl Into<String>, start: BlameStart) -> Self {
        BlameRequest {
            path: path.into(),
            start,
        }
    }
}

impl std::fmt::Display for DiffSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffSide::Empty => write!(f, "empty"),
            DiffSide::Commit(oid) => write!(f, "commit {}", oid.to_short_oid()),
            DiffSide::Index => write!(f, "index"),
            DiffSide::Workspace => write!(f, "workspace"),
        }
    }
}

impl std::fmt::Display for DiffRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl std::fmt::Display for BlameStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlameStart::Commit(oid) => write!(f, "commit {}", oid.to_short_oid()),
            BlameStart::Contents(bytes) => write!(f, "contents ({} bytes)", bytes.len()),
            BlameStart::Workspace => write!(f, "workspace"),
        }
    }
}

impl std::fmt::Display for BlameRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start)
    }
}
