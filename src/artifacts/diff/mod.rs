//! Tree-level comparison: which files differ between two trees
//!
//! - `tree_diff`: recursive diff producing added, deleted and modified paths

pub mod tree_diff;
