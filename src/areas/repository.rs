use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::ref_name::SymRefName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::changes::source::ChangeSource;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::stash::Stash;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::scan::StatusScan;
use anyhow::Context;
use bytes::Bytes;
use std::cell::{OnceCell, RefCell, RefMut};
use std::path::{Path, PathBuf};

const GIT_DIR: &str = ".git";

/// A git repository opened read-only.
pub struct Repository {
    path: Box<Path>,
    git_dir: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    /// Loaded on first use and kept for the life of the repository
    index: OnceCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    include_ignored: bool,
}

impl Repository {
    /// Open the repository containing `path`, searching parent folders
    /// for the `.git` directory the way git does.
    pub fn discover(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = path
            .canonicalize()
            .with_context(|| format!("Unable to open {}", path.display()))?;

        let root = start
            .ancestors()
            .find(|dir| dir.join(GIT_DIR).is_dir())
            .with_context(|| {
                format!(
                    "not a git repository (or any of the parent directories): {}",
                    start.display()
                )
            })?;

        Ok(Self::new(root, writer))
    }

    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Self {
        let git_dir = path.join(GIT_DIR);

        Repository {
            path: path.into(),
            writer: RefCell::new(writer),
            index: OnceCell::new(),
            database: Database::new(git_dir.join("objects").into_boxed_path()),
            workspace: Workspace::new(path.into()),
            refs: Refs::new(git_dir.clone().into_boxed_path()),
            git_dir: git_dir.into_boxed_path(),
            include_ignored: false,
        }
    }

    /// Report ignored files in the working tree status
    pub fn with_ignored(mut self, include_ignored: bool) -> Self {
        self.include_ignored = include_ignored;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn index(&self) -> anyhow::Result<&Index> {
        if let Some(index) = self.index.get() {
            return Ok(index);
        }

        let index = Index::load(&self.git_dir.join("index"))?;
        Ok(self.index.get_or_init(|| index))
    }

    pub fn current_ref(&self) -> anyhow::Result<SymRefName> {
        self.refs.current_ref()
    }

    /// Commit named by a revision expression
    pub fn resolve_revision(&self, revision: &str) -> anyhow::Result<ObjectId> {
        Revision::try_parse(revision)?
            .resolve(self)?
            .with_context(|| format!("revision {revision} does not name a commit"))
    }

    pub fn stash(&self, position: usize) -> anyhow::Result<Stash> {
        let entry = self.refs.stash_entry(position)?;
        let commit = self
            .database
            .load_commit(&entry.new_oid)
            .with_context(|| format!("Unable to read stash@{{{position}}}"))?;

        let message = if entry.message.is_empty() {
            commit.short_message().to_string()
        } else {
            entry.message
        };

        Stash::try_from_parents(entry.new_oid, commit.parents().to_vec(), message)
    }

    pub fn stashes(&self) -> anyhow::Result<Vec<Stash>> {
        (0..self.refs.stash_list()?.len())
            .map(|position| self.stash(position))
            .collect()
    }
}

impl ChangeSource for Repository {
    fn head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.refs.read_head()
    }

    fn commit_parents(&self, commit: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self.database.load_commit(commit)?.parents().to_vec())
    }

    fn full_manifest(&self, commit: &ObjectId) -> anyhow::Result<Vec<String>> {
        Ok(self.database.flatten_tree(commit)?.into_keys().collect())
    }

    fn flat_changes(
        &self,
        commit: &ObjectId,
        parent: Option<&ObjectId>,
    ) -> anyhow::Result<Vec<FileChange>> {
        Ok(self
            .database
            .tree_diff(parent, Some(commit))?
            .into_file_changes())
    }

    fn workspace_status(&self) -> anyhow::Result<Vec<FileChange>> {
        let head = self.head()?;

        StatusScan::new(
            &self.database,
            self.index()?,
            &self.workspace,
            head.as_ref(),
            self.include_ignored,
        )
        .changes()
    }

    fn contents(&self, path: &str, commit: &ObjectId) -> anyhow::Result<Option<Bytes>> {
        self.database.blob_at(commit, path)
    }

    fn staged_contents(&self, path: &str) -> anyhow::Result<Option<Bytes>> {
        match self.index()?.entry_by_path(path) {
            Some(entry) => Ok(Some(self.database.load_blob(&entry.oid)?.into_content())),
            None => Ok(None),
        }
    }

    fn working_file_path(&self, path: &str) -> Option<PathBuf> {
        Some(self.workspace.file_path(path))
    }

    fn working_contents(&self, path: &str) -> anyhow::Result<Option<Bytes>> {
        self.workspace.read_file(path)
    }

    fn has_file(&self, path: &str, commit: &ObjectId) -> anyhow::Result<bool> {
        Ok(self
            .database
            .entry_at(commit, path)?
            .is_some_and(|entry| !entry.is_tree()))
    }

    fn is_staged(&self, path: &str) -> anyhow::Result<bool> {
        Ok(self.index()?.is_tracked(path))
    }
}
