use crate::artifacts::changes::commit_changes::CommitChanges;
use crate::artifacts::changes::merger::{combine, overlay};
use crate::artifacts::changes::requests::{BlameRequest, BlameStart, DiffRequest, DiffSide};
use crate::artifacts::changes::source::ChangeSource;
use crate::artifacts::changes::tree_node::TreeNode;
use crate::artifacts::changes::OrWarn;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::stash::Stash;
use crate::artifacts::status::file_change::FileChange;
use bytes::Bytes;

/// Workspace, index and untracked files recorded by one stash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashChanges {
    stash: Stash,
}

impl StashChanges {
    pub fn new(stash: Stash) -> Self {
        StashChanges { stash }
    }

    pub fn stash(&self) -> &Stash {
        &self.stash
    }

    pub fn flat_changes(&self, source: &dyn ChangeSource) -> Vec<FileChange> {
        self.tree(source).changed_leaves()
    }

    pub fn tree(&self, source: &dyn ChangeSource) -> TreeNode {
        let main = CommitChanges::new(
            source,
            self.stash.main.clone(),
            Some(self.stash.base.clone()),
        );
        let mut root = main.unstaged_tree(source);

        if let Some(index) = &self.stash.index {
            let index = CommitChanges::new(source, index.clone(), Some(self.stash.base.clone()));
            combine(&mut root, &index.tree(source));
        }

        if let Some(untracked) = &self.stash.untracked {
            let untracked = CommitChanges::new(source, untracked.clone(), None);
            overlay(&mut root, &untracked.tree(source));
        }

        root
    }

    fn untracked_holding(&self, source: &dyn ChangeSource, path: &str) -> Option<&ObjectId> {
        self.stash.untracked.as_ref().filter(|untracked| {
            source
                .has_file(path, untracked)
                .or_warn(&format!("unable to look up {path} in the untracked commit"))
                .unwrap_or(false)
        })
    }

    /// Commit holding the staged or the unstaged version of `path`
    pub fn commit_for(
        &self,
        source: &dyn ChangeSource,
        path: &str,
        staged: bool,
    ) -> Option<&ObjectId> {
        if staged {
            return self.stash.index.as_ref();
        }

        self.untracked_holding(source, path)
            .or(Some(&self.stash.main))
    }

    pub fn diff_request(
        &self,
        source: &dyn ChangeSource,
        path: &str,
        staged: bool,
    ) -> Option<DiffRequest> {
        if staged {
            let index = self.stash.index.clone()?;
            return Some(DiffRequest::new(
                path,
                DiffSide::Commit(self.stash.base.clone()),
                DiffSide::Commit(index),
            ));
        }

        if let Some(untracked) = self.untracked_holding(source, path) {
            return Some(DiffRequest::new(
                path,
                DiffSide::Empty,
                DiffSide::Commit(untracked.clone()),
            ));
        }

        let from = self.stash.index.as_ref().unwrap_or(&self.stash.base).clone();
        Some(DiffRequest::new(
            path,
            DiffSide::Commit(from),
            DiffSide::Commit(self.stash.main.clone()),
        ))
    }

    pub fn file_bytes(&self, source: &dyn ChangeSource, path: &str, staged: bool) -> Option<Bytes> {
        let commit = self.commit_for(source, path, staged)?;

        source
            .contents(path, commit)
            .or_warn(&format!("unable to read {path} from the stash"))
            .flatten()
    }

    pub fn blame_request(
        &self,
        source: &dyn ChangeSource,
        path: &str,
        staged: bool,
    ) -> Option<BlameRequest> {
        let commit = self.commit_for(source, path, staged)?;

        Some(BlameRequest::new(path, BlameStart::Commit(commit.clone())))
    }
}
