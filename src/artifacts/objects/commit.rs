//! Git commit object
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Other headers (`gpgsig`, `encoding`, `mergetag`) and their continuation
//! lines are skipped.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::BufRead;

/// Author or committer signature
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    /// Seconds since the Unix epoch
    timestamp: i64,
    /// Offset as written, e.g. `+0200`
    timezone: String,
}

impl Author {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

impl TryFrom<&str> for Author {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // split from the right: the name may contain spaces
        let parts = value.rsplitn(3, ' ').collect::<Vec<_>>();
        if parts.len() < 3 {
            anyhow::bail!("invalid signature {value:?}");
        }

        let timezone = parts[0].to_string();
        let timestamp = parts[1]
            .parse::<i64>()
            .with_context(|| format!("invalid signature timestamp in {value:?}"))?;
        let name_email = parts[2];

        let email_start = name_email
            .find('<')
            .with_context(|| format!("signature is missing '<' in {value:?}"))?;
        let email_end = name_email
            .rfind('>')
            .filter(|end| *end > email_start)
            .with_context(|| format!("signature is missing '>' in {value:?}"))?;

        Ok(Author {
            name: name_email[..email_start].trim().to_string(),
            email: name_email[email_start + 1..email_end].to_string(),
            timestamp,
            timezone,
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parents: Vec<ObjectId>,
    tree_oid: ObjectId,
    author: Author,
    committer: Author,
    message: String,
}

impl Commit {
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        let content = String::from_utf8_lossy(&content);

        let (headers, message) = content.split_once("\n\n").unwrap_or((&content, ""));

        let mut tree_oid = None;
        let mut parents = Vec::new();
        let mut author = None;
        let mut committer = None;

        for line in headers.lines().filter(|line| !line.starts_with(' ')) {
            let (key, value) = line.split_once(' ').unwrap_or((line, ""));

            match key {
                "tree" => tree_oid = Some(ObjectId::try_parse(value.to_string())?),
                "parent" => parents.push(ObjectId::try_parse(value.to_string())?),
                "author" => author = Some(Author::try_from(value)?),
                "committer" => committer = Some(Author::try_from(value)?),
                _ => {}
            }
        }

        let author = author.context("invalid commit object: missing author line")?;

        Ok(Commit {
            parents,
            tree_oid: tree_oid.context("invalid commit object: missing tree line")?,
            committer: committer.unwrap_or_else(|| author.clone()),
            author,
            message: message.to_string(),
        })
    }
}
