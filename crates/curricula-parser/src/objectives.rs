//! Learning-objective extraction, validation and expansion.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use curricula_core::{Error, ObjectiveCatalog, Result};
use regex::Regex;

use crate::document::{Block, Document};

/// Objective-code token: two or more lowercase alphanumeric/hyphen
/// segments joined by `/`, e.g. `html/forms/input`.
fn code_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[a-z0-9-]+(?:/[a-z0-9-]+)+\b").unwrap())
}

/// Resolve the learning objectives referenced by a document.
///
/// Without a catalog the extracted codes pass through deduplicated. With a
/// catalog every code must exist in it, and a referenced parent whose
/// children were not explicitly referenced is expanded to its descendant
/// leaf codes.
pub fn resolve(
    doc: &Document,
    catalog: Option<&ObjectiveCatalog>,
    readme: &Path,
) -> Result<BTreeSet<String>> {
    let referenced = extract(doc);

    let Some(catalog) = catalog else {
        return Ok(referenced);
    };

    let unknown: Vec<String> = referenced
        .iter()
        .filter(|code| !catalog.contains(code))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        // BTreeSet iteration already yields the codes sorted
        return Err(Error::UnknownObjectives {
            path: readme.to_path_buf(),
            codes: unknown,
        });
    }

    let mut resolved = referenced.clone();
    for code in &referenced {
        let children = catalog.children(code);
        if children.is_empty() {
            continue;
        }
        let child_referenced = children.iter().any(|child| referenced.contains(child));
        if !child_referenced {
            tracing::debug!(%code, "expanding parent objective to its leaves");
            resolved.extend(catalog.leaves(code));
        }
    }

    Ok(resolved)
}

/// Extract the deduplicated set of code-like tokens from heading,
/// paragraph and list-item text. Image URLs are never scanned.
fn extract(doc: &Document) -> BTreeSet<String> {
    let mut codes = BTreeSet::new();
    for block in doc.blocks() {
        match block {
            Block::Heading { text, .. } | Block::Paragraph { text } => {
                scan(text, &mut codes);
            }
            Block::List { items } => {
                for item in items {
                    scan(item, &mut codes);
                }
            }
            Block::Image { .. } => {}
        }
    }
    codes
}

fn scan(text: &str, codes: &mut BTreeSet<String>) {
    for found in code_pattern().find_iter(text) {
        codes.insert(found.as_str().to_string());
    }
}
