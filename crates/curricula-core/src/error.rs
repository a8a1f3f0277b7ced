//! Error types for the curricula pipeline.
//!
//! Every pipeline stage fails with one of these variants and the failure
//! propagates unmodified to the caller; no stage converts another stage's
//! error. Message text is part of the public contract.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The error type for pipeline operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Project directory basename does not match the `00-slug` convention.
    #[error("Expected project dir to be in 00-slug format and got {basename}")]
    NameFormat {
        /// The offending directory.
        path: PathBuf,
        /// The actual final path segment.
        basename: String,
    },

    /// Locale tag resolves to a base language outside the supported set.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Filesystem failure. The native error is preserved so callers can
    /// distinguish a missing file from content-validation errors.
    #[error("{source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// README exists but its content is empty or whitespace-only.
    #[error("Project README.md is empty")]
    EmptyDocument {
        /// Full path of the README.
        path: PathBuf,
    },

    /// README does not start with a depth-1 heading.
    #[error("Expected README.md to start with h1 and instead saw {found}")]
    TitleFormat {
        /// Full path of the README.
        path: PathBuf,
        /// What the first block actually was, e.g. `heading (depth: 2)`
        /// or `paragraph`.
        found: String,
    },

    /// Referenced objective codes missing from the catalog.
    #[error("Unknown learning objectives: {}.", .codes.join(", "))]
    UnknownObjectives {
        /// Full path of the README.
        path: PathBuf,
        /// The unknown codes, sorted.
        codes: Vec<String>,
    },

    /// Cover image fetch returned a non-200 status.
    #[error("HTTP error {status}")]
    Http {
        /// The response status code.
        status: u16,
    },

    /// Cover image fetch failed at the transport level.
    #[error("failed to fetch cover image: {message}")]
    Fetch {
        /// Transport error description.
        message: String,
    },

    /// Cover image could not be decoded, resized or encoded.
    #[error("image processing failed: {message}")]
    Image {
        /// Codec error description.
        message: String,
    },
}

impl Error {
    /// Wrap a transport-level fetch failure.
    pub fn fetch(err: impl std::fmt::Display) -> Self {
        Self::Fetch {
            message: err.to_string(),
        }
    }

    /// Wrap an image codec failure.
    pub fn image(err: impl std::fmt::Display) -> Self {
        Self::Image {
            message: err.to_string(),
        }
    }

    /// The most specific file involved, when the error carries one.
    ///
    /// Content errors reference the README, name errors the directory.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NameFormat { path, .. }
            | Self::Io { path, .. }
            | Self::EmptyDocument { path }
            | Self::TitleFormat { path, .. }
            | Self::UnknownObjectives { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Native filesystem error code, when one applies.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => Some("ENOENT"),
                io::ErrorKind::PermissionDenied => Some("EACCES"),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Result type alias using the pipeline [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_format_message() {
        let err = Error::NameFormat {
            path: PathBuf::from("/fixtures/a-project"),
            basename: "a-project".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Expected project dir to be in 00-slug format and got a-project"
        );
        assert_eq!(err.path(), Some(Path::new("/fixtures/a-project")));
    }

    #[test]
    fn test_unknown_objectives_message() {
        let err = Error::UnknownObjectives {
            path: PathBuf::from("/p/README.md"),
            codes: vec!["css/bar".to_string(), "html/foo".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown learning objectives: css/bar, html/foo."
        );
    }

    #[test]
    fn test_not_found_code() {
        let err = Error::Io {
            path: PathBuf::from("/p/README.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
        };
        assert_eq!(err.code(), Some("ENOENT"));
        assert!(err.to_string().contains("no such file or directory"));
    }

    #[test]
    fn test_http_message() {
        let err = Error::Http { status: 404 };
        assert_eq!(err.to_string(), "HTTP error 404");
        assert_eq!(err.path(), None);
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_title_format_message() {
        let err = Error::TitleFormat {
            path: PathBuf::from("/p/README.md"),
            found: "heading (depth: 2)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Expected README.md to start with h1 and instead saw heading (depth: 2)"
        );
    }
}
