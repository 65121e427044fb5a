//! Change trees for git selections
//!
//! A selection (a commit, a stash entry or the staging area) is turned into
//! one sorted tree of folders and files, every node carrying a staged and an
//! unstaged status, along with the diff, blame and content lookups a viewer
//! needs for each file.

pub mod areas;
pub mod artifacts;
pub mod commands;

/// What the change tree is built for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The working tree against the index and HEAD
    Staging,
    /// A commit against its first parent, or against `parent` when given
    Commit {
        revision: String,
        parent: Option<String>,
    },
    /// `stash@{N}`
    Stash(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}
