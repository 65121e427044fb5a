use crate::artifacts::changes::builder::build;
use crate::artifacts::changes::requests::{BlameRequest, BlameStart, DiffRequest, DiffSide};
use crate::artifacts::changes::source::ChangeSource;
use crate::artifacts::changes::tree_node::TreeNode;
use crate::artifacts::changes::OrWarn;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileChange;
use bytes::Bytes;

/// Changes introduced by one historical commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitChanges {
    commit: ObjectId,
    /// Effective diff parent, `None` diffs against the empty tree
    parent: Option<ObjectId>,
}

impl CommitChanges {
    /// Select `commit`, diffed against `parent` or else its first parent.
    pub fn new(source: &dyn ChangeSource, commit: ObjectId, parent: Option<ObjectId>) -> Self {
        let parent = parent.or_else(|| {
            source
                .commit_parents(&commit)
                .or_warn(&format!("unable to read parents of {}", commit.to_short_oid()))
                .and_then(|parents| parents.into_iter().next())
        });

        CommitChanges { commit, parent }
    }

    pub fn commit(&self) -> &ObjectId {
        &self.commit
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn flat_changes(&self, source: &dyn ChangeSource) -> Vec<FileChange> {
        match source.flat_changes(&self.commit, self.parent.as_ref()) {
            Ok(changes) => changes,
            Err(error) if self.parent.is_some() => {
                tracing::warn!(
                    commit = %self.commit.to_short_oid(),
                    "unable to diff against parent, using the empty tree: {error:#}"
                );
                source
                    .flat_changes(&self.commit, None)
                    .or_warn("unable to list commit changes")
                    .unwrap_or_default()
            }
            Err(error) => {
                tracing::warn!(
                    commit = %self.commit.to_short_oid(),
                    "unable to list commit changes: {error:#}"
                );
                Vec::new()
            }
        }
    }

    /// Every file of the commit, changes in the staged slot.
    pub fn tree(&self, source: &dyn ChangeSource) -> TreeNode {
        self.build_tree(source, false)
    }

    /// The same tree shaped as workspace changes, used for a stash's main commit.
    pub(crate) fn unstaged_tree(&self, source: &dyn ChangeSource) -> TreeNode {
        self.build_tree(source, true)
    }

    fn build_tree(&self, source: &dyn ChangeSource, unstaged: bool) -> TreeNode {
        let Some(manifest) = source
            .full_manifest(&self.commit)
            .or_warn(&format!("unable to list files of {}", self.commit.to_short_oid()))
        else {
            return TreeNode::root();
        };

        let mut changes = self.flat_changes(source);
        if unstaged {
            changes = changes.into_iter().map(FileChange::into_unstaged).collect();
        }

        build(&changes, Some(&manifest))
    }

    pub fn diff_request(&self, path: &str) -> DiffRequest {
        let from = self
            .parent
            .clone()
            .map(DiffSide::Commit)
            .unwrap_or(DiffSide::Empty);

        DiffRequest::new(path, from, DiffSide::Commit(self.commit.clone()))
    }

    pub fn file_bytes(&self, source: &dyn ChangeSource, path: &str) -> Option<Bytes> {
        source
            .contents(path, &self.commit)
            .or_warn(&format!("unable to read {path}"))
            .flatten()
    }

    pub fn blame_request(&self, path: &str) -> BlameRequest {
        BlameRequest::new(path, BlameStart::Commit(self.commit.clone()))
    }
}
