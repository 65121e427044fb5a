use crate::areas::repository::Repository;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::branch::{ANCESTOR_REGEX, PARENT_REGEX, REF_ALIASES, STASH_ENTRY_REGEX};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;

/// Minimum length of an abbreviated object id
const MIN_PREFIX_LENGTH: usize = 4;

/// A revision expression naming a commit.
///
/// - ref names: `main`, `origin/main`, `refs/tags/v1`, `HEAD`, and `@` for `HEAD`
/// - full or abbreviated object ids, tried only when no ref has that name
/// - stash entries: `stash@{N}`
/// - `<rev>^` for the first parent, `<rev>~N` for the Nth first-parent ancestor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Ref(RefName),
    Stash(usize),
    Ancestor(Box<Revision>, usize),
    Parent(Box<Revision>),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let parent_regex = regex::Regex::new(PARENT_REGEX)
            .with_context(|| format!("invalid parent regex: {PARENT_REGEX}"))?;
        let ancestor_regex = regex::Regex::new(ANCESTOR_REGEX)
            .with_context(|| format!("invalid ancestor regex: {ANCESTOR_REGEX}"))?;
        let stash_regex = regex::Regex::new(STASH_ENTRY_REGEX)
            .with_context(|| format!("invalid stash regex: {STASH_ENTRY_REGEX}"))?;

        if let Some(caps) = parent_regex.captures(revision) {
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Parent(Box::new(base_revision)))
        } else if let Some(caps) = ancestor_regex.captures(revision) {
            let generations: usize = caps[2]
                .parse()
                .with_context(|| format!("failed to parse generations in revision: {revision}"))?;
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Ancestor(Box::new(base_revision), generations))
        } else if let Some(caps) = stash_regex.captures(revision) {
            let position: usize = caps[1]
                .parse()
                .with_context(|| {
                    format!("failed to parse stash position in revision: {revision}")
                })?;

            Ok(Revision::Stash(position))
        } else {
            let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);
            Ok(Revision::Ref(RefName::try_parse(resolved_name.to_string())?))
        }
    }

    /// `Ok(None)` when the walk runs past a root commit.
    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<Option<ObjectId>> {
        match self {
            Revision::Ref(name) => Self::resolve_name(name, repository).map(Some),
            Revision::Stash(position) => Ok(Some(repository.stash(*position)?.main)),
            Revision::Parent(base_revision) => {
                Self::resolve_commit_parent(base_revision.resolve(repository)?, repository)
            }
            Revision::Ancestor(base_revision, generations) => {
                let mut oid = base_revision.resolve(repository)?;
                for _ in 0..*generations {
                    oid = Self::resolve_commit_parent(oid, repository)?;
                }

                Ok(oid)
            }
        }
    }

    fn resolve_name(name: &RefName, repository: &Repository) -> anyhow::Result<ObjectId> {
        if let Some(oid) = repository.refs().resolve(name)? {
            return Ok(oid);
        }

        if Self::looks_like_oid(name.as_ref()) {
            return Self::resolve_oid(name.as_ref(), repository);
        }

        anyhow::bail!(
            "ambiguous argument '{}': unknown revision or path not in the working tree",
            name
        )
    }

    fn resolve_commit_parent(
        oid: Option<ObjectId>,
        repository: &Repository,
    ) -> anyhow::Result<Option<ObjectId>> {
        match oid {
            Some(oid) => Ok(repository.database().load_commit(&oid)?.parent().cloned()),
            None => Ok(None),
        }
    }

    fn resolve_oid(prefix: &str, repository: &Repository) -> anyhow::Result<ObjectId> {
        let database = repository.database();
        let commit_matches = database
            .find_objects_by_prefix(prefix)?
            .into_iter()
            .filter(|oid| {
                database
                    .object_type(oid)
                    .map(|object_type| object_type == ObjectType::Commit)
                    .unwrap_or(false)
            })
            .collect::<Vec<_>>();

        match commit_matches.as_slice() {
            [] => anyhow::bail!(
                "ambiguous argument '{}': unknown revision or path not in the working tree",
                prefix
            ),
            [oid] => Ok(oid.clone()),
            candidates => {
                let mut error_msg = format!(
                    "short SHA1 {} is ambiguous\nhint: The candidates are:",
                    prefix
                );
                for oid in candidates {
                    error_msg.push_str(&format!("\nhint:   {} commit", oid.to_short_oid()));
                }
                anyhow::bail!(error_msg)
            }
        }
    }

    fn looks_like_oid(s: &str) -> bool {
        s.len() >= MIN_PREFIX_LENGTH && s.len() <= 40 && s.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Ref(name) => write!(f, "{name}"),
            Revision::Stash(position) => write!(f, "stash@{{{position}}}"),
            Revision::Parent(base) => write!(f, "{base}^"),
            Revision::Ancestor(base, generations) => write!(f, "{base}~{generations}"),
        }
    }
}
