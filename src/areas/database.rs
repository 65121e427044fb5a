use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::diff::tree_diff::{TreeDiff, join_path};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Cursor, Read};
use std::path::{Path, PathBuf};

/// Read-only view of the loose object store under `.git/objects`.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: read packfiles so repositories after `git gc` are supported
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Files changed between two trees (or commits). `None` is the empty tree.
    pub fn tree_diff(
        &self,
        old_oid: Option<&ObjectId>,
        new_oid: Option<&ObjectId>,
    ) -> anyhow::Result<TreeDiff<'_>> {
        let mut tree_diff = TreeDiff::new(self);
        tree_diff.compare_oids(old_oid, new_oid, "")?;
        Ok(tree_diff)
    }

    /// Inflated object bytes, header included
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_path)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(object_reader)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(object_reader)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                object_reader,
            )?))),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Option<Blob>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(Some(Blob::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Commit => Ok(Some(Commit::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        self.parse_object_as_commit(object_id)?
            .with_context(|| format!("object {object_id} is not a commit"))
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        self.parse_object_as_blob(object_id)?
            .with_context(|| format!("object {object_id} is not a blob"))
    }

    /// The tree itself, or the root tree of a commit.
    pub fn load_tree(&self, object_id: &ObjectId) -> anyhow::Result<Tree> {
        match self.parse_object(object_id)? {
            ObjectBox::Tree(tree) => Ok(*tree),
            ObjectBox::Commit(commit) => self.load_tree(commit.tree_oid()),
            ObjectBox::Blob(_) => Err(anyhow::anyhow!("object {object_id} is not a tree")),
        }
    }

    /// Every file below the tree (or commit), keyed by `/`-joined path.
    pub fn flatten_tree(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<BTreeMap<String, DatabaseEntry>> {
        let mut files = BTreeMap::new();
        self.collect_files(object_id, "", &mut files)?;
        Ok(files)
    }

    fn collect_files(
        &self,
        object_id: &ObjectId,
        prefix: &str,
        files: &mut BTreeMap<String, DatabaseEntry>,
    ) -> anyhow::Result<()> {
        for (name, entry) in self.load_tree(object_id)?.into_entries() {
            let path = join_path(prefix, &name);

            if entry.is_tree() {
                self.collect_files(&entry.oid, &path, files)?;
            } else {
                files.insert(path, entry);
            }
        }

        Ok(())
    }

    /// Entry found by walking `path` down from the tree (or commit).
    pub fn entry_at(
        &self,
        object_id: &ObjectId,
        path: &str,
    ) -> anyhow::Result<Option<DatabaseEntry>> {
        let mut tree = self.load_tree(object_id)?;
        let mut components = path.split('/').filter(|part| !part.is_empty()).peekable();

        while let Some(name) = components.next() {
            let Some(entry) = tree.entry(name).cloned() else {
                return Ok(None);
            };

            if components.peek().is_none() {
                return Ok(Some(entry));
            }
            if !entry.is_tree() {
                return Ok(None);
            }

            tree = self.load_tree(&entry.oid)?;
        }

        Ok(None)
    }

    /// Blob contents of the file at `path`, `None` when absent or a folder.
    pub fn blob_at(&self, object_id: &ObjectId, path: &str) -> anyhow::Result<Option<Bytes>> {
        match self.entry_at(object_id, path)? {
            Some(entry) if !entry.is_tree() => {
                Ok(Some(self.load_blob(&entry.oid)?.into_content()))
            }
            _ => Ok(None),
        }
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectType, impl BufRead)> {
        let object_content = self.load(object_id)?;
        let mut object_reader = Cursor::new(object_content);

        let (object_type, size) = ObjectType::parse_header(&mut object_reader)
            .with_context(|| format!("invalid header in object {object_id}"))?;

        let body_len = object_reader.get_ref().len() - object_reader.position() as usize;
        if body_len != size {
            anyhow::bail!("object {object_id} has {body_len} bytes but its header says {size}");
        }

        Ok((object_type, object_reader))
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path)
            .with_context(|| format!("Unable to read object file {}", object_path.display()))?;

        Self::decompress(object_content.into())
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    /// All loose objects whose id starts with `prefix`.
    ///
    /// Prefixes of two or more characters only scan their fan-out directory.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        let dirs = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255u8).map(|i| format!("{i:02x}")).collect()
        };

        let mut matches = Vec::new();
        for dir_name in dirs {
            let dir_path = self.path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            for entry in std::fs::read_dir(&dir_path)? {
                let file_name = entry?.file_name();
                let full_oid = format!("{}{}", dir_name, file_name.to_string_lossy());

                if full_oid.starts_with(&prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    pub fn object_type(&self, object_id: &ObjectId) -> anyhow::Result<ObjectType> {
        let (object_type, _) = self.parse_object_as_bytes(object_id)?;
        Ok(object_type)
    }
}
