//! Change trees
//!
//! Flat change lists from a commit, a stash or the staging area are turned
//! into one sorted tree of folders and files, each node classified on its
//! staged and unstaged side.
//!
//! - `builder`: flat list (plus optional commit manifest) to tree
//! - `merger`: folding a staged tree or an untracked tree into another
//! - `model`: the selection façades deciding which lists feed the builder
//! - `source`: the repository data the façades read

pub mod builder;
pub mod commit_changes;
pub mod merger;
pub mod model;
pub mod requests;
pub mod source;
pub mod staging_changes;
pub mod stash_changes;
pub mod tree_node;

#[cfg(test)]
pub(crate) mod memory;

/// Degrade a failed repository read to `None`, logging why.
pub(crate) trait OrWarn<T> {
    fn or_warn(self, what: &str) -> Option<T>;
}

impl<T> OrWarn<T> for anyhow::Result<T> {
    fn or_warn(self, what: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!("{what}: {error:#}");
                None
            }
        }
    }
}
