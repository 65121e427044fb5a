//! Repository storage areas, read side
//!
//! - `database`: loose objects (blobs, trees, commits)
//! - `index`: the staging area file
//! - `refs`: HEAD, branches, tags, packed refs and reflogs
//! - `repository`: the areas opened together, serving change models
//! - `workspace`: the working tree and its ignore rules

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
