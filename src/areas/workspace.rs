use crate::artifacts::index::index_entry::EntryMetadata;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

const GIT_DIR: &str = ".git";

/// The working tree: file listing, contents, stat data and ignore rules.
pub struct Workspace {
    path: Box<Path>,
    ignore: Gitignore,
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace").field("path", &self.path).finish()
    }
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        let ignore = Self::build_ignore(&path);
        Workspace { path, ignore }
    }

    /// Rules from the root `.gitignore` and `.git/info/exclude`
    fn build_ignore(root: &Path) -> Gitignore {
        let mut builder = GitignoreBuilder::new(root);

        for file in [root.join(".gitignore"), root.join(GIT_DIR).join("info").join("exclude")] {
            if file.is_file()
                && let Some(error) = builder.add(&file)
            {
                tracing::warn!("ignoring part of {}: {error}", file.display());
            }
        }

        builder.build().unwrap_or_else(|error| {
            tracing::warn!("unable to build ignore rules: {error}");
            Gitignore::empty()
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every file and symlink below the root, `.git` excluded, as sorted
    /// `/`-separated relative paths.
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != GIT_DIR);

        for entry in walker {
            let entry = entry.with_context(|| format!("Unable to list {}", self.path.display()))?;
            if entry.file_type().is_dir() {
                continue;
            }

            if let Some(relative) = self.relative_path(entry.path()) {
                files.push(relative);
            }
        }

        files.sort();
        Ok(files)
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.path).ok()?;
        let parts = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;

        Some(parts.join("/"))
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        let is_dir = self.path.join(path).is_dir();
        self.ignore
            .matched_path_or_any_parents(path, is_dir)
            .is_ignore()
    }

    pub fn file_path(&self, path: &str) -> std::path::PathBuf {
        self.path.join(path)
    }

    /// Contents as git would store them: a symlink yields its target.
    /// `Ok(None)` when the file does not exist.
    pub fn read_file(&self, path: &str) -> anyhow::Result<Option<Bytes>> {
        let file_path = self.path.join(path);

        let metadata = match std::fs::symlink_metadata(&file_path) {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("Unable to stat {}", file_path.display()));
            }
        };

        if metadata.file_type().is_symlink() {
            let target = std::fs::read_link(&file_path)
                .with_context(|| format!("Unable to read link {}", file_path.display()))?;
            return Ok(Some(Bytes::from(target.to_string_lossy().into_owned())));
        }
        if metadata.is_dir() {
            return Ok(None);
        }

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(Some(content.into()))
    }

    pub fn parse_blob(&self, path: &str) -> anyhow::Result<Option<Blob>> {
        Ok(self.read_file(path)?.map(Blob::new))
    }

    pub fn blob_id(&self, path: &str) -> anyhow::Result<Option<ObjectId>> {
        Ok(self.parse_blob(path)?.map(|blob| blob.object_id()))
    }

    /// `Ok(None)` when the file does not exist.
    pub fn stat_file(&self, path: &str) -> anyhow::Result<Option<EntryMetadata>> {
        let file_path = self.path.join(path);

        match std::fs::symlink_metadata(&file_path) {
            Ok(metadata) => Ok(Some(EntryMetadata::from_metadata(&file_path, &metadata))),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => {
                Err(error).with_context(|| format!("Unable to stat {}", file_path.display()))
            }
        }
    }
}
