//! Invocation configuration.
//!
//! `ParseOptions` is the explicit, validated-at-entry configuration for a
//! single pipeline run; `ParseContext` injects the version/clock values
//! stamped onto the final record so tests stay deterministic.

use chrono::{DateTime, Utc};

use crate::catalog::ObjectiveCatalog;

/// Options for a single pipeline invocation.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Curriculum track, copied verbatim into the record.
    pub track: Option<String>,
    /// Source repository, copied verbatim into the record.
    pub repo: Option<String>,
    /// Curriculum version, copied verbatim into the record.
    pub version: Option<String>,
    /// Full locale tag, e.g. `es-ES` or `pt-BR`. Required.
    pub locale: String,
    /// Translation suffix; appended to the slug and used to pick
    /// `README.<suffix>.md`.
    pub suffix: Option<String>,
    /// Learning-objective catalog. Absence disables validation.
    pub catalog: Option<ObjectiveCatalog>,
}

impl ParseOptions {
    /// Create options for the given locale tag.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// Set the pass-through track.
    pub fn with_track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }

    /// Set the pass-through repository.
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Set the pass-through version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the translation suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Attach a learning-objective catalog.
    pub fn with_catalog(mut self, catalog: ObjectiveCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }
}

/// Values stamped onto the final record.
///
/// Passed into the assembler instead of being read from ambient globals;
/// a fixed clock can be injected for deterministic tests.
#[derive(Debug, Clone)]
pub struct ParseContext {
    parser_version: String,
    fixed_now: Option<DateTime<Utc>>,
}

impl ParseContext {
    /// Context stamping the given parser release identifier, using the
    /// system clock.
    pub fn new(parser_version: impl Into<String>) -> Self {
        Self {
            parser_version: parser_version.into(),
            fixed_now: None,
        }
    }

    /// Pin the clock to a fixed instant.
    pub fn with_fixed_now(mut self, now: DateTime<Utc>) -> Self {
        self.fixed_now = Some(now);
        self
    }

    /// The parser release identifier.
    pub fn parser_version(&self) -> &str {
        &self.parser_version
    }

    /// Current time, or the pinned instant when one was injected.
    pub fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }
}
