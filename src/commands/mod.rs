//! Command implementations
//!
//! Each command is an `impl Repository` block writing to the repository's
//! writer, so tests can capture output.

pub mod porcelain;
