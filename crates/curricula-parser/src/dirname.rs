//! Project directory name validation.

use std::path::Path;
use std::sync::OnceLock;

use curricula_core::{Error, Result};
use regex::Regex;

fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2})-([a-z0-9-]+)$").unwrap())
}

/// A validated ordinal-prefixed project directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDirname {
    /// Two-digit ordinal prefix.
    pub ordinal: String,
    /// Lowercase kebab-case slug.
    pub slug: String,
}

impl ProjectDirname {
    /// Validate the final path segment of a project directory against the
    /// `00-slug` convention.
    pub fn from_path(dir: &Path) -> Result<Self> {
        let basename = dir
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        match pattern().captures(basename) {
            Some(caps) => Ok(Self {
                ordinal: caps[1].to_string(),
                slug: caps[2].to_string(),
            }),
            None => Err(Error::NameFormat {
                path: dir.to_path_buf(),
                basename: basename.to_string(),
            }),
        }
    }
}
