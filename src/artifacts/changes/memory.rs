use crate::artifacts::changes::source::ChangeSource;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::change_status::ChangeStatus;
use crate::artifacts::status::file_change::FileChange;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;

pub(crate) type Files = BTreeMap<String, Bytes>;

#[derive(Debug, Clone, Default)]
struct MemoryCommit {
    parents: Vec<ObjectId>,
    files: Files,
}

/// Repository double keeping commits, index and working tree in maps.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemorySource {
    commits: HashMap<ObjectId, MemoryCommit>,
    unreadable: HashSet<ObjectId>,
    head: Option<ObjectId>,
    index: Files,
    workspace: Files,
    status: Vec<FileChange>,
    root: PathBuf,
}

/// `c` must be a hex digit.
pub(crate) fn oid(c: char) -> ObjectId {
    ObjectId::try_parse(c.to_string().repeat(40)).unwrap()
}

pub(crate) fn files(entries: &[(&str, &str)]) -> Files {
    entries
        .iter()
        .map(|(path, content)| (path.to_string(), Bytes::from(content.to_string())))
        .collect()
}

impl MemorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MemorySource {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_commit(mut self, oid: ObjectId, parents: Vec<ObjectId>, files: Files) -> Self {
        self.commits.insert(oid, MemoryCommit { parents, files });
        self
    }

    /// Keep the commit listed as a parent but fail every read of it.
    pub fn with_unreadable(mut self, oid: ObjectId) -> Self {
        self.unreadable.insert(oid);
        self
    }

    pub fn with_head(mut self, oid: ObjectId) -> Self {
        self.head = Some(oid);
        self
    }

    pub fn with_index(mut self, index: Files) -> Self {
        self.index = index;
        self
    }

    pub fn with_workspace(mut self, workspace: Files, status: Vec<FileChange>) -> Self {
        self.workspace = workspace;
        self.status = status;
        self
    }

    fn read(&self, commit: &ObjectId) -> anyhow::Result<&MemoryCommit> {
        if self.unreadable.contains(commit) {
            anyhow::bail!("object {} is unreadable", commit);
        }

        self.commits
            .get(commit)
            .ok_or_else(|| anyhow::anyhow!("object {} not found", commit))
    }
}

impl ChangeSource for MemorySource {
    fn head(&self) -> anyhow::Result<Option<ObjectId>> {
        Ok(self.head.clone())
    }

    fn commit_parents(&self, commit: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self.read(commit)?.parents.clone())
    }

    fn full_manifest(&self, commit: &ObjectId) -> anyhow::Result<Vec<String>> {
        Ok(self.read(commit)?.files.keys().cloned().collect())
    }

    fn flat_changes(
        &self,
        commit: &ObjectId,
        parent: Option<&ObjectId>,
    ) -> anyhow::Result<Vec<FileChange>> {
        let new = &self.read(commit)?.files;
        let empty = Files::new();
        let old = match parent {
            Some(parent) => &self.read(parent)?.files,
            None => &empty,
        };

        let deleted = old
            .keys()
            .filter(|path| !new.contains_key(*path))
            .map(|path| FileChange::staged(path.clone(), ChangeStatus::Deleted));
        let others = new.iter().filter_map(|(path, content)| match old.get(path) {
            None => Some(FileChange::staged(path.clone(), ChangeStatus::Added)),
            Some(previous) if previous != content => {
                Some(FileChange::staged(path.clone(), ChangeStatus::Modified))
            }
            Some(_) => None,
        });

        let mut changes = deleted.chain(others).collect::<Vec<_>>();
        changes.sort();
        Ok(changes)
    }

    fn workspace_status(&self) -> anyhow::Result<Vec<FileChange>> {
        Ok(self.status.clone())
    }

    fn contents(&self, path: &str, commit: &ObjectId) -> anyhow::Result<Option<Bytes>> {
        Ok(self.read(commit)?.files.get(path).cloned())
    }

    fn staged_contents(&self, path: &str) -> anyhow::Result<Option<Bytes>> {
        Ok(self.index.get(path).cloned())
    }

    fn working_file_path(&self, path: &str) -> Option<PathBuf> {
        Some(self.root.join(path))
    }

    fn working_contents(&self, path: &str) -> anyhow::Result<Option<Bytes>> {
        Ok(self.workspace.get(path).cloned())
    }

    fn has_file(&self, path: &str, commit: &ObjectId) -> anyhow::Result<bool> {
        Ok(self.read(commit)?.files.contains_key(path))
    }
}
