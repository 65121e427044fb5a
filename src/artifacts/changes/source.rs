use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileChange;
use bytes::Bytes;
use std::path::PathBuf;

/// Repository data the change models are built from.
///
/// Paths are repository-relative with `/` separators. Content lookups return
/// `Ok(None)` when the path is absent from the requested side.
pub trait ChangeSource {
    /// Commit HEAD points to, `None` on an unborn branch
    fn head(&self) -> anyhow::Result<Option<ObjectId>>;

    fn commit_parents(&self, commit: &ObjectId) -> anyhow::Result<Vec<ObjectId>>;

    /// Every file path of the commit's tree, sorted.
    fn full_manifest(&self, commit: &ObjectId) -> anyhow::Result<Vec<String>>;

    /// Commit-shaped changes of `commit` against `parent`, or against the
    /// empty tree when there is no parent.
    fn flat_changes(
        &self,
        commit: &ObjectId,
        parent: Option<&ObjectId>,
    ) -> anyhow::Result<Vec<FileChange>>;

    /// Staged and unstaged classification of the live working tree.
    fn workspace_status(&self) -> anyhow::Result<Vec<FileChange>>;

    fn contents(&self, path: &str, commit: &ObjectId) -> anyhow::Result<Option<Bytes>>;

    fn staged_contents(&self, path: &str) -> anyhow::Result<Option<Bytes>>;

    fn working_file_path(&self, path: &str) -> Option<PathBuf>;

    fn working_contents(&self, path: &str) -> anyhow::Result<Option<Bytes>>;

    fn has_file(&self, path: &str, commit: &ObjectId) -> anyhow::Result<bool>;

    fn is_staged(&self, path: &str) -> anyhow::Result<bool> {
        Ok(self.staged_contents(path)?.is_some())
    }
}
