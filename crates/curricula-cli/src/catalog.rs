//! Objective catalog file loading.
//!
//! The pipeline itself is catalog-format agnostic; this loader reads the
//! JSON forest the CLI accepts via `--lo`: an object mapping each code to
//! its list of child codes. Children without an entry of their own are
//! leaves.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context as _;
use curricula_core::ObjectiveCatalog;

/// Load a catalog from a JSON file.
pub fn load(path: &Path) -> anyhow::Result<ObjectiveCatalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let entries: BTreeMap<String, Vec<String>> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid catalog file {}", path.display()))?;
    Ok(ObjectiveCatalog::from_entries(entries))
}
