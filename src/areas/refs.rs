//! Git references, read side
//!
//! - Loose refs: text files holding a 40-character id or `ref: <path>`
//! - `packed-refs`: `<id> <refname>` lines, `#` header and `^` peeled lines skipped
//! - Reflogs under `logs/`, used to list stash entries

use crate::artifacts::branch::ref_name::{RefName, SymRefName};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::stash::{ReflogEntry, STASH_REF_NAME};
use anyhow::Context;
use derive_new::new;
use std::collections::HashMap;
use std::path::Path;

const SYMREF_REGEX: &str = r"^ref: (.+)$";

pub const HEAD_REF_NAME: &str = "HEAD";

/// Symbolic refs pointing at symbolic refs are followed this many times
const MAX_SYMREF_DEPTH: usize = 5;

#[derive(Debug, new)]
pub struct Refs {
    /// The git directory
    path: Box<Path>,
}

#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { sym_ref_name: SymRefName },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].to_string()),
            }))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(content.to_string())?)))
        }
    }
}

impl Refs {
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_ref_path(HEAD_REF_NAME, 0)
    }

    /// Final ref in HEAD's chain: `refs/heads/<branch>`, or `HEAD` when detached.
    pub fn current_ref(&self) -> anyhow::Result<SymRefName> {
        let mut current = SymRefName::new(HEAD_REF_NAME.to_string());

        for _ in 0..MAX_SYMREF_DEPTH {
            match SymRefOrOid::read_symref_or_oid(&self.path.join(current.as_ref_path()))? {
                Some(SymRefOrOid::SymRef { sym_ref_name }) => current = sym_ref_name,
                Some(SymRefOrOid::Oid(_)) | None => return Ok(current),
            }
        }

        Ok(current)
    }

    /// Resolve a user-typed name through the usual search order, loose refs
    /// before packed ones. `Ok(None)` when nothing matches.
    pub fn resolve(&self, name: &RefName) -> anyhow::Result<Option<ObjectId>> {
        let packed = self.packed_refs()?;

        for candidate in name.candidates() {
            if let Some(oid) = self.read_ref_path(&candidate, 0)? {
                return Ok(Some(oid));
            }
            if let Some(oid) = packed.get(&candidate) {
                return Ok(Some(oid.clone()));
            }
        }

        Ok(None)
    }

    fn read_ref_path(&self, ref_path: &str, depth: usize) -> anyhow::Result<Option<ObjectId>> {
        if depth >= MAX_SYMREF_DEPTH {
            anyhow::bail!("symbolic ref {ref_path} is nested too deeply");
        }

        match SymRefOrOid::read_symref_or_oid(&self.path.join(ref_path))? {
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            Some(SymRefOrOid::SymRef { sym_ref_name }) => {
                match self.read_ref_path(sym_ref_name.as_ref_path(), depth + 1)? {
                    Some(oid) => Ok(Some(oid)),
                    None => Ok(self.packed_refs()?.get(sym_ref_name.as_ref_path()).cloned()),
                }
            }
            None => Ok(None),
        }
    }

    pub fn packed_refs(&self) -> anyhow::Result<HashMap<String, ObjectId>> {
        let path = self.path.join("packed-refs");
        if !path.is_file() {
            return Ok(HashMap::new());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read packed refs at {:?}", path))?;

        content
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('^'))
            .map(|line| -> anyhow::Result<(String, ObjectId)> {
                let (oid, name) = line
                    .split_once(' ')
                    .with_context(|| format!("invalid packed ref line {line:?}"))?;
                Ok((name.to_string(), ObjectId::try_parse(oid.to_string())?))
            })
            .collect()
    }

    /// Reflog of `ref_path`, oldest first
    pub fn reflog(&self, ref_path: &str) -> anyhow::Result<Vec<ReflogEntry>> {
        let path = self.path.join("logs").join(ref_path);
        if !path.is_file() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read reflog at {:?}", path))?;

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ReflogEntry::try_from)
            .collect()
    }

    /// Stash commits, `stash@{0}` first
    pub fn stash_list(&self) -> anyhow::Result<Vec<ReflogEntry>> {
        let mut entries = self.reflog(STASH_REF_NAME)?;

        // without a reflog only the tip is known
        if entries.is_empty()
            && let Some(tip) = self.read_ref_path(STASH_REF_NAME, 0)?
        {
            entries.push(ReflogEntry {
                old_oid: ObjectId::default(),
                new_oid: tip,
                message: String::new(),
            });
        }

        entries.reverse();
        Ok(entries)
    }

    pub fn stash_entry(&self, position: usize) -> anyhow::Result<ReflogEntry> {
        let mut entries = self.stash_list()?;
        let count = entries.len();

        if position >= count {
            anyhow::bail!("stash@{{{position}}} does not exist, {count} stash entries found");
        }

        Ok(entries.swap_remove(position))
    }
}
