//! Change classification
//!
//! - `change_status`: the per-side status values and their aggregation
//! - `file_change`: raw status bits and the classified entry of a flat list
//! - `inspector`: index against HEAD and index against working tree checks
//! - `scan`: the working tree status of every path

pub mod change_status;
pub mod file_change;
pub mod inspector;
pub mod scan;
