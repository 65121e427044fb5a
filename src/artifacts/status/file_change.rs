use crate::artifacts::status::change_status::ChangeStatus;
use bitflags::bitflags;
use colored::ColoredString;

bitflags! {
    /// Raw per-path status bits as produced by a workspace scan.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct StatusFlags: u32 {
        const INDEX_NEW        = 1 << 0;
        const INDEX_MODIFIED   = 1 << 1;
        const INDEX_DELETED    = 1 << 2;
        const INDEX_RENAMED    = 1 << 3;
        const INDEX_TYPECHANGE = 1 << 4;
        const WT_NEW           = 1 << 7;
        const WT_MODIFIED      = 1 << 8;
        const WT_DELETED       = 1 << 9;
        const WT_TYPECHANGE    = 1 << 10;
        const WT_RENAMED       = 1 << 11;
        const IGNORED          = 1 << 14;
        const CONFLICTED       = 1 << 15;
    }
}

impl StatusFlags {
    pub fn unstaged_status(&self) -> ChangeStatus {
        if self.contains(Self::WT_NEW) {
            ChangeStatus::Untracked
        } else if self.intersects(Self::WT_MODIFIED | Self::WT_TYPECHANGE) {
            ChangeStatus::Modified
        } else if self.contains(Self::WT_DELETED) {
            ChangeStatus::Deleted
        } else if self.contains(Self::WT_RENAMED) {
            ChangeStatus::Renamed
        } else if self.contains(Self::IGNORED) {
            ChangeStatus::Ignored
        } else if self.contains(Self::CONFLICTED) {
            ChangeStatus::Conflicted
        } else {
            ChangeStatus::Unmodified
        }
    }

    // WT_TYPECHANGE also marks the staged side as modified
    pub fn staged_status(&self) -> ChangeStatus {
        if self.contains(Self::INDEX_NEW) {
            ChangeStatus::Added
        } else if self.intersects(Self::INDEX_MODIFIED | Self::WT_TYPECHANGE) {
            ChangeStatus::Modified
        } else if self.contains(Self::INDEX_DELETED) {
            ChangeStatus::Deleted
        } else if self.contains(Self::INDEX_RENAMED) {
            ChangeStatus::Renamed
        } else {
            ChangeStatus::Unmodified
        }
    }
}

/// One entry of a flat change list.
///
/// `path` is repository-relative with `/` separators and unique within a list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FileChange {
    pub path: String,
    pub staged: ChangeStatus,
    pub unstaged: ChangeStatus,
}

impl FileChange {
    pub fn new(path: impl Into<String>, staged: ChangeStatus, unstaged: ChangeStatus) -> Self {
        FileChange {
            path: path.into(),
            staged,
            unstaged,
        }
    }

    /// A commit-shaped change: the status lives in the staged slot.
    pub fn staged(path: impl Into<String>, status: ChangeStatus) -> Self {
        Self::new(path, status, ChangeStatus::Unmodified)
    }

    pub fn unstaged(path: impl Into<String>, status: ChangeStatus) -> Self {
        Self::new(path, ChangeStatus::Unmodified, status)
    }

    pub fn from_status_flags(path: impl Into<String>, flags: StatusFlags) -> Self {
        Self::new(path, flags.staged_status(), flags.unstaged_status())
    }

    /// Move the staged classification into the unstaged slot.
    pub fn into_unstaged(self) -> Self {
        FileChange {
            path: self.path,
            staged: ChangeStatus::Unmodified,
            unstaged: self.staged,
        }
    }

    pub fn is_changed(&self) -> bool {
        !self.staged.is_unmodified() || !self.unstaged.is_unmodified()
    }

    pub fn codes(&self) -> String {
        format!("{}{}", self.staged.code(), self.unstaged.code())
    }

    pub fn colored_codes(&self) -> (ColoredString, ColoredString) {
        (self.staged.staged_colored(), self.unstaged.unstaged_colored())
    }
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.codes(), self.path)
    }
}
