//! Git objects as read from the object database
//!
//! Every loose object inflates to `<type> <size>\0<content>`. Only the three
//! types a change tree needs are understood:
//!
//! - **Blob**: raw file content
//! - **Tree**: a directory listing of names, modes and object ids
//! - **Commit**: a tree id, parent ids, signatures and a message

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of an abbreviated object id in listings
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
