use crate::artifacts::branch::INVALID_REF_NAME_REGEX;
use anyhow::Context;
use derive_new::new;

/// Full ref path relative to the git directory, e.g. `refs/heads/main`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn is_detached_head(&self) -> bool {
        self.0 == "HEAD"
    }

    pub fn as_ref_path(&self) -> &str {
        &self.0
    }

    /// `main` for `refs/heads/main`, otherwise the full path
    pub fn short_name(&self) -> &str {
        self.0.strip_prefix("refs/heads/").unwrap_or(&self.0)
    }
}

impl std::fmt::Display for SymRefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A name as typed by the user: `main`, `origin/main`, `refs/tags/v1`, `HEAD`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct RefName(String);

impl RefName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("ref name cannot be empty");
        }

        let re = regex::Regex::new(INVALID_REF_NAME_REGEX)
            .with_context(|| format!("invalid ref name regex: {INVALID_REF_NAME_REGEX}"))?;

        if re.is_match(&name) {
            anyhow::bail!("invalid ref name: {}", name);
        }

        Ok(Self(name))
    }

    /// Candidate ref paths in lookup order
    pub fn candidates(&self) -> Vec<String> {
        let name = &self.0;
        vec![
            name.clone(),
            format!("refs/{name}"),
            format!("refs/tags/{name}"),
            format!("refs/heads/{name}"),
            format!("refs/remotes/{name}"),
            format!("refs/remotes/{name}/HEAD"),
        ]
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
