//! Git data structures and the change tree engine
//!
//! - `branch`: ref names and revision parsing
//! - `changes`: change trees, their merging and the selection models
//! - `database`: tree entry type
//! - `diff`: tree-level diffing
//! - `index`: index file entries and modes
//! - `objects`: blob, tree and commit objects
//! - `stash`: stash commits and reflog entries
//! - `status`: change classification and the working tree scan

pub mod branch;
pub mod changes;
pub mod database;
pub mod diff;
pub mod index;
pub mod objects;
pub mod stash;
pub mod status;
