use crate::areas::workspace::Workspace;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::index::index_entry::{EntryMetadata, IndexEntry};
use crate::artifacts::status::file_change::StatusFlags;
use derive_new::new;

/// Per-path comparisons of the three trees a status scan looks at.
#[derive(new)]
pub struct Inspector<'r> {
    workspace: &'r Workspace,
}

impl<'r> Inspector<'r> {
    fn is_content_changed(&self, index_entry: &IndexEntry) -> anyhow::Result<bool> {
        let oid = self.workspace.blob_id(&index_entry.path)?;

        Ok(oid.as_ref() != Some(&index_entry.oid))
    }

    /// Stat data decides when it can; contents are hashed only when size
    /// and mode agree but the timestamps moved.
    pub fn check_index_against_workspace(
        &self,
        entry: Option<&IndexEntry>,
        stat: Option<&EntryMetadata>,
    ) -> anyhow::Result<StatusFlags> {
        match (entry, stat) {
            (None, Some(_)) => Ok(StatusFlags::WT_NEW),
            (None, None) => Ok(StatusFlags::empty()),
            (Some(_), None) => Ok(StatusFlags::WT_DELETED),
            (Some(entry), Some(stat)) if is_type_change(entry.metadata.mode, stat.mode) => {
                Ok(StatusFlags::WT_TYPECHANGE)
            }
            (Some(entry), Some(stat)) if !entry.stat_match(stat) => Ok(StatusFlags::WT_MODIFIED),
            (Some(entry), Some(stat)) if entry.times_match(stat) => Ok(StatusFlags::empty()),
            (Some(entry), Some(_)) if self.is_content_changed(entry)? => {
                Ok(StatusFlags::WT_MODIFIED)
            }
            _ => Ok(StatusFlags::empty()),
        }
    }

    pub fn check_index_against_head_tree(
        &self,
        index_entry: Option<&IndexEntry>,
        head_entry: Option<&DatabaseEntry>,
    ) -> StatusFlags {
        match (index_entry, head_entry) {
            (Some(index_entry), Some(head_entry))
                if head_entry.mode != index_entry.metadata.mode
                    || head_entry.oid != index_entry.oid =>
            {
                StatusFlags::INDEX_MODIFIED
            }
            (Some(_), None) => StatusFlags::INDEX_NEW,
            (None, Some(_)) => StatusFlags::INDEX_DELETED,
            _ => StatusFlags::empty(),
        }
    }
}

/// File versus symlink versus submodule; the executable bit alone is a
/// plain modification.
fn is_type_change(indexed: EntryMode, on_disk: EntryMode) -> bool {
    std::mem::discriminant(&indexed) != std::mem::discriminant(&on_disk)
}
