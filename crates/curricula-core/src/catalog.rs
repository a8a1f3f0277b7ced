//! The learning-objective catalog.
//!
//! A forest of dotted/path-style codes (`html/foo`) loaded once into a flat
//! map with explicit child links: O(1) lookup, O(children) expansion.

use std::collections::{BTreeSet, HashMap};

/// Hierarchy of valid learning-objective codes.
///
/// Every code that appears as an entry key or as a child of one is known to
/// the catalog. A child with no entry of its own is a leaf.
#[derive(Debug, Clone, Default)]
pub struct ObjectiveCatalog {
    children: HashMap<String, Vec<String>>,
    known: BTreeSet<String>,
}

impl ObjectiveCatalog {
    /// Build a catalog from `(code, child codes)` entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for (code, children) in entries {
            catalog.insert(code, children);
        }
        catalog
    }

    /// Add a code and its direct children.
    pub fn insert<S: Into<String>>(&mut self, code: S, children: Vec<S>) {
        let code = code.into();
        let children: Vec<String> = children.into_iter().map(Into::into).collect();
        self.known.insert(code.clone());
        self.known.extend(children.iter().cloned());
        self.children.insert(code, children);
    }

    /// Whether the code exists anywhere in the catalog, as leaf or parent.
    pub fn contains(&self, code: &str) -> bool {
        self.known.contains(code)
    }

    /// Direct children of a code. Empty for leaves and unknown codes.
    pub fn children(&self, code: &str) -> &[String] {
        self.children.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All descendant leaf codes of a code.
    ///
    /// A leaf expands to itself; unknown codes expand to nothing.
    pub fn leaves(&self, code: &str) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        if !self.contains(code) {
            return out;
        }
        self.collect_leaves(code, &mut out);
        out
    }

    fn collect_leaves(&self, code: &str, out: &mut BTreeSet<String>) {
        let children = self.children(code);
        if children.is_empty() {
            out.insert(code.to_string());
            return;
        }
        for child in children {
            self.collect_leaves(child, out);
        }
    }

    /// Whether the catalog has no codes at all.
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ObjectiveCatalog {
        ObjectiveCatalog::from_entries([
            ("html", vec!["html/semantics", "html/forms"]),
            ("html/forms", vec!["html/forms/input", "html/forms/validation"]),
            ("css", vec![]),
        ])
    }

    #[test]
    fn test_contains_parents_and_leaves() {
        let catalog = sample();
        assert!(catalog.contains("html"));
        assert!(catalog.contains("html/semantics"));
        assert!(catalog.contains("html/forms/input"));
        assert!(catalog.contains("css"));
        assert!(!catalog.contains("html/foo"));
    }

    #[test]
    fn test_leaves_expand_recursively() {
        let catalog = sample();
        let leaves = catalog.leaves("html");
        assert_eq!(
            leaves,
            BTreeSet::from([
                "html/semantics".to_string(),
                "html/forms/input".to_string(),
                "html/forms/validation".to_string(),
            ])
        );
    }

    #[test]
    fn test_leaf_expands_to_itself() {
        let catalog = sample();
        assert_eq!(
            catalog.leaves("html/semantics"),
            BTreeSet::from(["html/semantics".to_string()])
        );
        assert_eq!(catalog.leaves("css"), BTreeSet::from(["css".to_string()]));
    }

    #[test]
    fn test_unknown_code_expands_to_nothing() {
        let catalog = sample();
        assert!(catalog.leaves("nope/nothing").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ObjectiveCatalog::default();
        assert!(catalog.is_empty());
        assert!(!catalog.contains("html"));
    }
}
