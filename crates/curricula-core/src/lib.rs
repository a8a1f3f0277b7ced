//! Shared types for the curricula project parser.
//!
//! This crate carries the types every other crate in the workspace agrees
//! on: the error taxonomy, the output [`ProjectRecord`], the invocation
//! [`ParseOptions`]/[`ParseContext`] pair, and the learning-objective
//! [`ObjectiveCatalog`].

pub mod catalog;
pub mod error;
pub mod options;
pub mod record;

pub use catalog::ObjectiveCatalog;
pub use error::{Error, Result};
pub use options::{ParseContext, ParseOptions};
pub use record::ProjectRecord;
