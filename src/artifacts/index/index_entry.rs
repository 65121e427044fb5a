//! Index entry representation
//!
//! ## Entry Format
//!
//! ```text
//! ctime, ctime_nsec, mtime, mtime_nsec, dev, ino, mode, uid, gid, size (10 x u32)
//! object id (20 bytes)
//! flags (u16): assume-valid (1 bit), extended (1 bit), stage (2 bits), name length (12 bits)
//! extended flags (u16, version 3 only, when the extended bit is set)
//! path (NUL terminated, padded with 1 to 8 NULs to a multiple of 8)
//! ```
//!
//! Stat data lets the status scan skip hashing files whose metadata did not
//! change since they were staged.

use crate::artifacts::index::entry_mode::{EntryMode, FileMode};
use crate::artifacts::objects::object_id::ObjectId;
use byteorder::{NetworkEndian, ReadBytesExt};
use is_executable::IsExecutable;
use std::fs::Metadata;
use std::io::{BufRead, Cursor};
use std::os::unix::prelude::MetadataExt;
use std::path::Path;

/// Block size for entry alignment
pub const ENTRY_BLOCK: usize = 8;

/// Fixed part of an entry before the optional extended flags and the path
pub const ENTRY_FIXED_SIZE: usize = 62;

const NAME_MASK: u16 = 0x0FFF;
const STAGE_SHIFT: u16 = 12;
const EXTENDED_FLAG: u16 = 0x4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Repository-relative path with `/` separators
    pub path: String,
    pub oid: ObjectId,
    /// 0 for a normal entry, 1 to 3 for the sides of an unresolved merge
    pub stage: u8,
    pub metadata: EntryMetadata,
}

impl IndexEntry {
    pub fn is_conflicted(&self) -> bool {
        self.stage != 0
    }

    /// Size and mode agree. A zero recorded size always matches since git
    /// stores it that way for entries it wants re-checked.
    pub fn stat_match(&self, other: &EntryMetadata) -> bool {
        (self.metadata.size == 0 || self.metadata.size == other.size)
            && self.metadata.mode == other.mode
    }

    pub fn times_match(&self, other: &EntryMetadata) -> bool {
        self.metadata.ctime == other.ctime
            && self.metadata.ctime_nsec == other.ctime_nsec
            && self.metadata.mtime == other.mtime
            && self.metadata.mtime_nsec == other.mtime_nsec
    }

    /// Read one entry starting at the cursor position, leaving the cursor on
    /// the next entry.
    pub fn parse(reader: &mut Cursor<&[u8]>, version: u32) -> anyhow::Result<Self> {
        let start = reader.position() as usize;

        let ctime = reader.read_u32::<NetworkEndian>()?;
        let ctime_nsec = reader.read_u32::<NetworkEndian>()?;
        let mtime = reader.read_u32::<NetworkEndian>()?;
        let mtime_nsec = reader.read_u32::<NetworkEndian>()?;
        let dev = reader.read_u32::<NetworkEndian>()?;
        let ino = reader.read_u32::<NetworkEndian>()?;
        let mode = EntryMode::try_from(reader.read_u32::<NetworkEndian>()?)?;
        let uid = reader.read_u32::<NetworkEndian>()?;
        let gid = reader.read_u32::<NetworkEndian>()?;
        let size = reader.read_u32::<NetworkEndian>()?;
        let oid = ObjectId::read_h40_from(reader)?;
        let flags = reader.read_u16::<NetworkEndian>()?;

        let mut fixed_size = ENTRY_FIXED_SIZE;
        if flags & EXTENDED_FLAG != 0 {
            if version < 3 {
                anyhow::bail!("extended entry flags in a version {version} index");
            }
            reader.read_u16::<NetworkEndian>()?;
            fixed_size += 2;
        }

        let mut name = Vec::new();
        reader.read_until(0, &mut name)?;
        if name.pop() != Some(0) {
            anyhow::bail!("missing NUL terminator in index entry name");
        }

        let name_length = (flags & NAME_MASK) as usize;
        if name_length != NAME_MASK as usize && name_length != name.len() {
            anyhow::bail!(
                "index entry name length {} does not match flags {}",
                name.len(),
                name_length
            );
        }

        let path = String::from_utf8(name)
            .map_err(|_| anyhow::anyhow!("invalid UTF-8 in index entry name"))?;

        let entry_size = (fixed_size + path.len() + ENTRY_BLOCK) / ENTRY_BLOCK * ENTRY_BLOCK;
        reader.set_position((start + entry_size) as u64);

        Ok(IndexEntry {
            path,
            oid,
            stage: ((flags >> STAGE_SHIFT) & 0x3) as u8,
            metadata: EntryMetadata {
                ctime,
                ctime_nsec,
                mtime,
                mtime_nsec,
                dev,
                ino,
                mode,
                uid,
                gid,
                size,
            },
        })
    }
}

/// Stat data as the index records it: every field truncated to 32 bits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    pub ctime: u32,
    pub ctime_nsec: u32,
    pub mtime: u32,
    pub mtime_nsec: u32,
    pub dev: u32,
    pub ino: u32,
    pub mode: EntryMode,
    pub uid: u32,
    pub gid: u32,
    pub size: u32,
}

impl EntryMetadata {
    /// `metadata` must come from `symlink_metadata` so links keep their type.
    pub fn from_metadata(file_path: &Path, metadata: &Metadata) -> Self {
        let mode = if metadata.is_dir() {
            EntryMode::Directory
        } else if metadata.file_type().is_symlink() {
            EntryMode::Symlink
        } else if file_path.is_executable() {
            EntryMode::File(FileMode::Executable)
        } else {
            EntryMode::File(FileMode::Regular)
        };

        Self {
            ctime: metadata.ctime() as u32,
            ctime_nsec: metadata.ctime_nsec() as u32,
            mtime: metadata.mtime() as u32,
            mtime_nsec: metadata.mtime_nsec() as u32,
            dev: metadata.dev() as u32,
            ino: metadata.ino() as u32,
            mode,
            uid: metadata.uid(),
            gid: metadata.gid(),
            size: metadata.size() as u32,
        }
    }
}
