//! Revision expressions and reference names
//!
//! - `ref_name`: validated names used to look up refs
//! - `revision`: `<rev>^`, `<rev>~N`, `stash@{N}`, abbreviated ids

pub mod ref_name;
pub mod revision;

pub const INVALID_REF_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
pub const PARENT_REGEX: &str = r"^(.+)\^$";
pub const ANCESTOR_REGEX: &str = r"^(.+)\~(\d+)$";
pub const STASH_ENTRY_REGEX: &str = r"^stash@\{(\d+)\}$";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};
