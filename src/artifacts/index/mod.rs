//! Git index file format
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "DIRC" (4 bytes)
//!   - Version: 2 or 3 (4 bytes)
//!   - Entry count (4 bytes)
//!
//! Entries (variable length, NUL padded to 8 bytes)
//!
//! Extensions (ignored here)
//!
//! Checksum (20 bytes): SHA-1 of all preceding bytes
//! ```
//!
//! Version 4 (prefix-compressed paths) is not read.

pub mod checksum;
pub mod entry_mode;
pub mod index_entry;

pub const CHECKSUM_SIZE: usize = 20;

pub const HEADER_SIZE: usize = 12;

pub const SIGNATURE: &[u8; 4] = b"DIRC";

pub const SUPPORTED_VERSIONS: [u32; 2] = [2, 3];
