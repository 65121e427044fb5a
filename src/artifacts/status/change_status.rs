use colored::{ColoredString, Colorize};

/// Classification of a single change dimension (staged or unstaged) of a path.
///
/// `Mixed` is only ever assigned to folders whose children disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ChangeStatus {
    #[default]
    Unmodified,
    Added,
    Deleted,
    Modified,
    Renamed,
    Copied,
    Untracked,
    Ignored,
    Conflicted,
    Mixed,
}

impl ChangeStatus {
    pub fn code(&self) -> char {
        match self {
            ChangeStatus::Unmodified => ' ',
            ChangeStatus::Added => 'A',
            ChangeStatus::Deleted => 'D',
            ChangeStatus::Modified => 'M',
            ChangeStatus::Renamed => 'R',
            ChangeStatus::Copied => 'C',
            ChangeStatus::Untracked => '?',
            ChangeStatus::Ignored => '!',
            ChangeStatus::Conflicted => 'U',
            ChangeStatus::Mixed => '*',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeStatus::Unmodified => "unmodified",
            ChangeStatus::Added => "added",
            ChangeStatus::Deleted => "deleted",
            ChangeStatus::Modified => "modified",
            ChangeStatus::Renamed => "renamed",
            ChangeStatus::Copied => "copied",
            ChangeStatus::Untracked => "untracked",
            ChangeStatus::Ignored => "ignored",
            ChangeStatus::Conflicted => "conflicted",
            ChangeStatus::Mixed => "mixed",
        }
    }

    pub fn is_unmodified(&self) -> bool {
        *self == ChangeStatus::Unmodified
    }

    /// Folder status derived from its children.
    ///
    /// All children equal yields that status, any disagreement yields `Mixed`,
    /// and no children at all yields `Unmodified`.
    pub fn aggregate(statuses: impl IntoIterator<Item = ChangeStatus>) -> ChangeStatus {
        let mut statuses = statuses.into_iter();

        match statuses.next() {
            None => ChangeStatus::Unmodified,
            Some(first) => {
                if statuses.all(|status| status == first) {
                    first
                } else {
                    ChangeStatus::Mixed
                }
            }
        }
    }

    pub fn staged_colored(&self) -> ColoredString {
        let code = self.code().to_string();
        match self {
            ChangeStatus::Conflicted | ChangeStatus::Mixed => code.yellow(),
            _ => code.green(),
        }
    }

    pub fn unstaged_colored(&self) -> ColoredString {
        let code = self.code().to_string();
        match self {
            ChangeStatus::Conflicted | ChangeStatus::Mixed => code.yellow(),
            _ => code.red(),
        }
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
