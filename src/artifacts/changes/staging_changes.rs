use crate::artifacts::changes::builder::build;
use crate::artifacts::changes::requests::{BlameRequest, BlameStart, DiffRequest, DiffSide};
use crate::artifacts::changes::source::ChangeSource;
use crate::artifacts::changes::tree_node::TreeNode;
use crate::artifacts::changes::OrWarn;
use crate::artifacts::status::file_change::FileChange;
use bytes::Bytes;
use std::path::PathBuf;

/// Live index and working tree changes; the only committable selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StagingChanges;

impl StagingChanges {
    pub fn flat_changes(&self, source: &dyn ChangeSource) -> Vec<FileChange> {
        source
            .workspace_status()
            .or_warn("unable to scan the working tree")
            .unwrap_or_default()
    }

    // The scan already classifies both dimensions, no combine step needed.
    pub fn tree(&self, source: &dyn ChangeSource) -> TreeNode {
        build(&self.flat_changes(source), None)
    }

    pub fn diff_request(&self, source: &dyn ChangeSource, path: &str, staged: bool) -> DiffRequest {
        if staged {
            let from = source
                .head()
                .or_warn("unable to resolve HEAD")
                .flatten()
                .map(DiffSide::Commit)
                .unwrap_or(DiffSide::Empty);

            return DiffRequest::new(path, from, DiffSide::Index);
        }

        let from = match self.in_index(source, path) {
            true => DiffSide::Index,
            false => DiffSide::Empty,
        };

        DiffRequest::new(path, from, DiffSide::Workspace)
    }

    pub fn file_bytes(&self, source: &dyn ChangeSource, path: &str, staged: bool) -> Option<Bytes> {
        let contents = if staged {
            source.staged_contents(path)
        } else {
            source.working_contents(path)
        };

        contents.or_warn(&format!("unable to read {path}")).flatten()
    }

    pub fn working_copy_path(&self, source: &dyn ChangeSource, path: &str) -> Option<PathBuf> {
        source.working_file_path(path)
    }

    pub fn blame_request(
        &self,
        source: &dyn ChangeSource,
        path: &str,
        staged: bool,
    ) -> Option<BlameRequest> {
        if !staged {
            return Some(BlameRequest::new(path, BlameStart::Workspace));
        }

        let contents = source
            .staged_contents(path)
            .or_warn(&format!("unable to read staged {path}"))
            .flatten()?;

        Some(BlameRequest::new(path, BlameStart::Contents(contents)))
    }

    fn in_index(&self, source: &dyn ChangeSource, path: &str) -> bool {
        source
            .is_staged(path)
            .or_warn(&format!("unable to look up {path} in the index"))
            .unwrap_or(false)
    }
}
