//! Git index (staging area), read side
//!
//! The file is read in one go under a shared lock, its trailing checksum
//! verified, then entries are parsed in place. Extensions after the entries
//! (cached trees, resolve-undo, ...) are skipped.

use crate::artifacts::index::checksum::verified_body;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, SUPPORTED_VERSIONS};
use anyhow::Context;
use byteorder::{NetworkEndian, ReadBytesExt};
use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Index {
    /// Stage 0 entries by path
    entries: BTreeMap<String, IndexEntry>,
    /// Entries of unresolved merges, stages 1 to 3, by path
    conflicts: BTreeMap<String, Vec<IndexEntry>>,
    version: u32,
}

impl Index {
    /// A missing or empty index file reads as an empty index.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("Unable to open index file {}", path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)
            .with_context(|| format!("Unable to lock index file {}", path.display()))?;

        let mut data = Vec::new();
        lock.deref_mut()
            .read_to_end(&mut data)
            .with_context(|| format!("Unable to read index file {}", path.display()))?;

        if data.is_empty() {
            return Ok(Self::default());
        }

        Self::parse(&data).with_context(|| format!("Invalid index file {}", path.display()))
    }

    pub fn parse(data: &[u8]) -> anyhow::Result<Self> {
        let body = verified_body(data)?;
        if body.len() < HEADER_SIZE {
            anyhow::bail!("index header is truncated");
        }

        let mut reader = Cursor::new(body);
        let mut signature = [0u8; 4];
        reader.read_exact(&mut signature)?;
        if &signature != SIGNATURE {
            anyhow::bail!("invalid index file signature");
        }

        let version = reader.read_u32::<NetworkEndian>()?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            anyhow::bail!("unsupported index file version: {version}");
        }

        let entries_count = reader.read_u32::<NetworkEndian>()?;
        let mut index = Index {
            version,
            ..Default::default()
        };

        for position in 0..entries_count {
            let entry = IndexEntry::parse(&mut reader, version)
                .with_context(|| format!("Unable to parse index entry {position}"))?;
            index.insert(entry);
        }

        Ok(index)
    }

    fn insert(&mut self, entry: IndexEntry) {
        if entry.is_conflicted() {
            self.conflicts
                .entry(entry.path.clone())
                .or_default()
                .push(entry);
        } else {
            self.entries.insert(entry.path.clone(), entry);
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn is_conflicted(&self, path: &str) -> bool {
        self.conflicts.contains_key(path)
    }

    pub fn conflicted_paths(&self) -> impl Iterator<Item = &String> {
        self.conflicts.keys()
    }

    /// Tracked at any stage
    pub fn is_tracked(&self, path: &str) -> bool {
        self.entries.contains_key(path) || self.conflicts.contains_key(path)
    }
}
