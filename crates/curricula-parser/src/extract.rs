//! Title and summary extraction.

use std::path::Path;

use curricula_core::{Error, Result};

use crate::document::{Block, Document};
use crate::locale::Lang;

/// Extract the project title.
///
/// The document must start with a depth-1 heading; anything else fails
/// with a [`Error::TitleFormat`] naming what was actually found.
pub fn title(doc: &Document, readme: &Path) -> Result<String> {
    let found = match doc.blocks().first() {
        Some(Block::Heading { depth: 1, text }) => return Ok(text.clone()),
        Some(Block::Heading { depth, .. }) => format!("heading (depth: {depth})"),
        Some(other) => other.kind().to_string(),
        None => "nothing".to_string(),
    };

    Err(Error::TitleFormat {
        path: readme.to_path_buf(),
        found,
    })
}

/// Extract the locale-specific project summary.
///
/// Scans headings case-insensitively for the language's canonical
/// summary-section phrase and returns the first paragraph before the next
/// heading of equal or shallower depth. A missing section is not an error.
pub fn summary(doc: &Document, lang: Lang) -> Option<String> {
    let phrase = lang.summary_heading();
    let blocks = doc.blocks();

    let (index, section_depth) = blocks.iter().enumerate().find_map(|(i, block)| {
        match block {
            Block::Heading { depth, text } if text.trim().to_lowercase() == phrase => {
                Some((i, *depth))
            }
            _ => None,
        }
    })?;

    for block in &blocks[index + 1..] {
        match block {
            Block::Heading { depth, .. } if *depth <= section_depth => return None,
            Block::Paragraph { text } if !text.is_empty() => return Some(text.clone()),
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "\
# Truco

![cover](https://img.test/cover.png)

Intro paragraph.

## Resumen del proyecto

En este proyecto crearás un juego de Truco.

Otra cosa.

## Resumo do projeto

Neste projeto você criará um jogo de Truco.

## Consideraciones
";

    #[test]
    fn test_title_from_h1() {
        let doc = Document::parse(README);
        let title = title(&doc, Path::new("/p/README.md")).unwrap();
        assert_eq!(title, "Truco");
    }

    #[test]
    fn test_title_rejects_wrong_depth() {
        let doc = Document::parse("## Not a title\n\nText.\n");
        let err = title(&doc, Path::new("/p/README.md")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected README.md to start with h1 and instead saw heading (depth: 2)"
        );
        assert_eq!(err.path(), Some(Path::new("/p/README.md")));
    }

    #[test]
    fn test_title_rejects_leading_paragraph() {
        let doc = Document::parse("Just some text.\n\n# Late title\n");
        let err = title(&doc, Path::new("/p/README.md")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected README.md to start with h1 and instead saw paragraph"
        );
    }

    #[test]
    fn test_title_rejects_leading_list() {
        let doc = Document::parse("- item\n- item\n");
        let err = title(&doc, Path::new("/p/README.md")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected README.md to start with h1 and instead saw list"
        );
    }

    #[test]
    fn test_summary_per_language() {
        let doc = Document::parse(README);
        assert_eq!(
            summary(&doc, Lang::Es).as_deref(),
            Some("En este proyecto crearás un juego de Truco.")
        );
        assert_eq!(
            summary(&doc, Lang::Pt).as_deref(),
            Some("Neste projeto você criará um jogo de Truco.")
        );
    }

    #[test]
    fn test_summary_heading_match_is_case_insensitive() {
        let doc = Document::parse("# T\n\n## RESUMEN DEL PROYECTO\n\nHola.\n");
        assert_eq!(summary(&doc, Lang::Es).as_deref(), Some("Hola."));
    }

    #[test]
    fn test_summary_absent_without_section() {
        let doc = Document::parse("# T\n\nIntro.\n");
        assert_eq!(summary(&doc, Lang::Es), None);
        assert_eq!(summary(&doc, Lang::Pt), None);
    }

    #[test]
    fn test_summary_stops_at_next_heading() {
        let doc = Document::parse("# T\n\n## Resumen del proyecto\n\n## Otra sección\n\nNo es el resumen.\n");
        assert_eq!(summary(&doc, Lang::Es), None);
    }
}
