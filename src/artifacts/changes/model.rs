use crate::artifacts::changes::commit_changes::CommitChanges;
use crate::artifacts::changes::requests::{BlameRequest, DiffRequest};
use crate::artifacts::changes::source::ChangeSource;
use crate::artifacts::changes::staging_changes::StagingChanges;
use crate::artifacts::changes::stash_changes::StashChanges;
use crate::artifacts::changes::tree_node::TreeNode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileChange;
use bytes::Bytes;
use std::path::PathBuf;

/// The selection a file list is shown for.
///
/// Every query takes the repository it reads from, so a model is a plain value
/// that can be compared, cloned and rebuilt on demand. `staged` picks the
/// staged or unstaged side of a file and is ignored by commits.
#[derive(Debug, Clone)]
pub enum ChangeModel {
    Commit(CommitChanges),
    Stash(StashChanges),
    Staging(StagingChanges),
}

impl ChangeModel {
    pub fn commit(source: &dyn ChangeSource, commit: ObjectId, parent: Option<ObjectId>) -> Self {
        ChangeModel::Commit(CommitChanges::new(source, commit, parent))
    }

    /// Commit id identifying the selection; the staging area has none.
    pub fn selected_reference_id(&self) -> Option<&ObjectId> {
        match self {
            ChangeModel::Commit(changes) => Some(changes.commit()),
            ChangeModel::Stash(changes) => Some(&changes.stash().main),
            ChangeModel::Staging(_) => None,
        }
    }

    pub fn has_unstaged_section(&self) -> bool {
        !matches!(self, ChangeModel::Commit(_))
    }

    pub fn supports_commit(&self) -> bool {
        matches!(self, ChangeModel::Staging(_))
    }

    pub fn flat_changes(&self, source: &dyn ChangeSource) -> Vec<FileChange> {
        let changes = match self {
            ChangeModel::Commit(changes) => changes.flat_changes(source),
            ChangeModel::Stash(changes) => changes.flat_changes(source),
            ChangeModel::Staging(changes) => changes.flat_changes(source),
        };

        tracing::debug!(kind = self.kind(), changes = changes.len(), "listed changes");
        changes
    }

    pub fn tree(&self, source: &dyn ChangeSource) -> TreeNode {
        match self {
            ChangeModel::Commit(changes) => changes.tree(source),
            ChangeModel::Stash(changes) => changes.tree(source),
            ChangeModel::Staging(changes) => changes.tree(source),
        }
    }

    pub fn diff_request(
        &self,
        source: &dyn ChangeSource,
        path: &str,
        staged: bool,
    ) -> Option<DiffRequest> {
        match self {
            ChangeModel::Commit(changes) => Some(changes.diff_request(path)),
            ChangeModel::Stash(changes) => changes.diff_request(source, path, staged),
            ChangeModel::Staging(changes) => Some(changes.diff_request(source, path, staged)),
        }
    }

    pub fn file_bytes(&self, source: &dyn ChangeSource, path: &str, staged: bool) -> Option<Bytes> {
        match self {
            ChangeModel::Commit(changes) => changes.file_bytes(source, path),
            ChangeModel::Stash(changes) => changes.file_bytes(source, path, staged),
            ChangeModel::Staging(changes) => changes.file_bytes(source, path, staged),
        }
    }

    /// On-disk location of the unstaged file; only the staging area has one.
    pub fn working_copy_path(&self, source: &dyn ChangeSource, path: &str) -> Option<PathBuf> {
        match self {
            ChangeModel::Staging(changes) => changes.working_copy_path(source, path),
            ChangeModel::Commit(_) | ChangeModel::Stash(_) => None,
        }
    }

    pub fn blame_request(
        &self,
        source: &dyn ChangeSource,
        path: &str,
        staged: bool,
    ) -> Option<BlameRequest> {
        match self {
            ChangeModel::Commit(changes) => Some(changes.blame_request(path)),
            ChangeModel::Stash(changes) => changes.blame_request(source, path, staged),
            ChangeModel::Staging(changes) => changes.blame_request(source, path, staged),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ChangeModel::Commit(_) => "commit",
            ChangeModel::Stash(_) => "stash",
            ChangeModel::Staging(_) => "staging",
        }
    }
}

impl PartialEq for ChangeModel {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.selected_reference_id() == other.selected_reference_id()
    }
}

impl Eq for ChangeModel {}
