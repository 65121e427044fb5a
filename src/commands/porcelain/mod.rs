//! User-facing commands
//!
//! - `tree`: print the change tree, or the flat change list
//! - `cat`: print the staged or unstaged bytes of a file
//! - `requests`: print the diff and blame requests for a file

use crate::Selection;
use crate::areas::repository::Repository;
use crate::artifacts::changes::model::ChangeModel;
use crate::artifacts::changes::staging_changes::StagingChanges;
use crate::artifacts::changes::stash_changes::StashChanges;
use anyhow::Context;

pub mod cat;
pub mod requests;
pub mod tree;

impl Repository {
    pub fn change_model(&self, selection: &Selection) -> anyhow::Result<ChangeModel> {
        match selection {
            Selection::Staging => Ok(ChangeModel::Staging(StagingChanges)),
            Selection::Commit { revision, parent } => {
                let commit = self
                    .resolve_revision(revision)
                    .with_context(|| format!("Unable to select commit {revision}"))?;
                let parent = parent
                    .as_deref()
                    .map(|parent| self.resolve_revision(parent))
                    .transpose()
                    .context("Unable to select the parent to compare with")?;

                Ok(ChangeModel::commit(self, commit, parent))
            }
            Selection::Stash(position) => Ok(ChangeModel::Stash(StashChanges::new(
                self.stash(*position)?,
            ))),
        }
    }
}
