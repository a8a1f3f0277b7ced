//! Curriculum project metadata extraction pipeline.
//!
//! Extracts a [`ProjectRecord`] from a single curriculum-project directory:
//! validates the `00-slug` directory name, resolves the locale to a
//! supported base language, parses the README into a block tree, enforces
//! the leading h1, extracts the locale-specific summary paragraph, resolves
//! learning-objective references against an optional catalog and produces
//! (or reuses) a cached `thumb.png` thumbnail.
//!
//! The entry point is [`process`]; every stage failure aborts the pipeline
//! immediately with one of the [`Error`] variants.

pub mod dirname;
pub mod document;
pub mod extract;
pub mod locale;
pub mod objectives;
pub mod project;
pub mod thumbnail;

pub use curricula_core::{
    Error, ObjectiveCatalog, ParseContext, ParseOptions, ProjectRecord, Result,
};
pub use project::process;
