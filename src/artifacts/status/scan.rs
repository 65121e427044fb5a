use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{FileChange, StatusFlags};
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub type HeadTree = BTreeMap<String, DatabaseEntry>;

/// Working tree status: HEAD tree, index and working files compared per
/// path. Untracked files are listed individually, never collapsed into their
/// folder.
#[derive(new)]
pub struct StatusScan<'r> {
    database: &'r Database,
    index: &'r Index,
    workspace: &'r Workspace,
    head: Option<&'r ObjectId>,
    include_ignored: bool,
}

impl<'r> StatusScan<'r> {
    pub fn flags(&self) -> anyhow::Result<BTreeMap<String, StatusFlags>> {
        let head_tree = self.load_head_tree()?;
        let workspace_files = self.workspace.list_files()?;
        let inspector = Inspector::new(self.workspace);

        let paths = head_tree
            .keys()
            .chain(self.index.entries().map(|entry| &entry.path))
            .chain(self.index.conflicted_paths())
            .chain(workspace_files.iter())
            .cloned()
            .collect::<BTreeSet<_>>();

        let mut flags = BTreeMap::new();
        for path in paths {
            let path_flags = self.path_flags(&path, &head_tree, &inspector)?;
            if !path_flags.is_empty() {
                flags.insert(path, path_flags);
            }
        }

        tracing::debug!(paths = flags.len(), "scanned working tree status");
        Ok(flags)
    }

    pub fn changes(&self) -> anyhow::Result<Vec<FileChange>> {
        Ok(self
            .flags()?
            .into_iter()
            .map(|(path, flags)| FileChange::from_status_flags(path, flags))
            .collect())
    }

    fn load_head_tree(&self) -> anyhow::Result<HeadTree> {
        match self.head {
            Some(head) => self.database.flatten_tree(head),
            None => Ok(HeadTree::new()),
        }
    }

    fn path_flags(
        &self,
        path: &str,
        head_tree: &HeadTree,
        inspector: &Inspector,
    ) -> anyhow::Result<StatusFlags> {
        if self.index.is_conflicted(path) {
            return Ok(StatusFlags::CONFLICTED);
        }

        let index_entry = self.index.entry_by_path(path);
        let head_entry = head_tree.get(path);
        let stat = self.workspace.stat_file(path)?;

        let mut flags = inspector.check_index_against_head_tree(index_entry, head_entry);

        let workspace_flags = inspector.check_index_against_workspace(index_entry, stat.as_ref())?;
        if workspace_flags.contains(StatusFlags::WT_NEW) && self.workspace.is_ignored(path) {
            if self.include_ignored {
                flags |= StatusFlags::IGNORED;
            }
        } else {
            flags |= workspace_flags;
        }

        Ok(flags)
    }
}
