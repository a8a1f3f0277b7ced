//! README loading and markdown parsing.
//!
//! The README is parsed into an ordered tree of block nodes. Inline
//! formatting (emphasis, links, code spans) is flattened to plain text;
//! only the block structure and the text matter downstream. Images are
//! inline in CommonMark, so each image reference is lifted to its own
//! block right after the block that contained it; a paragraph that held
//! only an image is kept as an empty-text paragraph.

use std::path::{Path, PathBuf};

use curricula_core::{Error, Result};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// A block-level node of a parsed README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading with its depth (1 = h1) and flattened text.
    Heading {
        /// Heading depth, 1 through 6.
        depth: u8,
        /// Flattened inline text.
        text: String,
    },
    /// A paragraph with its flattened text.
    Paragraph {
        /// Flattened inline text.
        text: String,
    },
    /// A list, flattened to its item texts (nested items included).
    List {
        /// Flattened item texts.
        items: Vec<String>,
    },
    /// An image reference.
    Image {
        /// The image URL.
        url: String,
        /// Alt text.
        alt: String,
    },
}

impl Block {
    /// Node kind name as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Paragraph { .. } => "paragraph",
            Self::List { .. } => "list",
            Self::Image { .. } => "image",
        }
    }
}

/// An immutable, ordered tree of block nodes.
#[derive(Debug, Clone, Default)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// The block nodes in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// URL of the first image reference, used as the cover.
    pub fn first_image_url(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Image { url, .. } => Some(url.as_str()),
            _ => None,
        })
    }

    /// Parse markdown source into a block tree.
    pub fn parse(input: &str) -> Self {
        let mut builder = TreeBuilder::default();
        for event in Parser::new_ext(input, Options::empty()) {
            builder.push(event);
        }
        Self {
            blocks: builder.blocks,
        }
    }
}

/// Read and parse a README file.
///
/// A missing file propagates the underlying filesystem error (its native
/// not-found kind preserved); an existing but empty or whitespace-only
/// file fails with [`Error::EmptyDocument`].
pub async fn load(dir: &Path, filename: &str) -> Result<(PathBuf, Document)> {
    let path = dir.join(filename);
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

    if raw.trim().is_empty() {
        return Err(Error::EmptyDocument { path });
    }

    tracing::debug!(path = %path.display(), "parsed README");
    Ok((path, Document::parse(&raw)))
}

/// Event-stream state for building the block tree.
#[derive(Default)]
struct TreeBuilder {
    blocks: Vec<Block>,
    heading: Option<(u8, String)>,
    paragraph: Option<String>,
    paragraph_had_image: bool,
    list_depth: usize,
    items: Vec<String>,
    item_stack: Vec<String>,
    image: Option<(String, String)>,
    pending_images: Vec<Block>,
}

impl TreeBuilder {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.heading = Some((heading_depth(level), String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((depth, text)) = self.heading.take() {
                    self.blocks.push(Block::Heading {
                        depth,
                        text: text.trim().to_string(),
                    });
                }
                self.flush_images();
            }
            Event::Start(Tag::Paragraph) => {
                if self.item_stack.is_empty() {
                    self.paragraph = Some(String::new());
                    self.paragraph_had_image = false;
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if let Some(text) = self.paragraph.take() {
                    let text = text.trim().to_string();
                    if !text.is_empty() || self.paragraph_had_image {
                        self.blocks.push(Block::Paragraph { text });
                    }
                    self.flush_images();
                }
            }
            Event::Start(Tag::List(_)) => {
                self.list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.blocks.push(Block::List {
                        items: std::mem::take(&mut self.items),
                    });
                    self.flush_images();
                }
            }
            Event::Start(Tag::Item) => {
                self.item_stack.push(String::new());
            }
            Event::End(TagEnd::Item) => {
                if let Some(item) = self.item_stack.pop() {
                    let item = item.trim().to_string();
                    if !item.is_empty() {
                        self.items.push(item);
                    }
                }
            }
            Event::Start(Tag::Image { dest_url, .. }) => {
                self.image = Some((dest_url.to_string(), String::new()));
                if self.paragraph.is_some() {
                    self.paragraph_had_image = true;
                }
            }
            Event::End(TagEnd::Image) => {
                if let Some((url, alt)) = self.image.take() {
                    self.pending_images.push(Block::Image {
                        url,
                        alt: alt.trim().to_string(),
                    });
                }
            }
            Event::Text(text) | Event::Code(text) => {
                self.push_text(&text);
            }
            Event::SoftBreak | Event::HardBreak => {
                self.push_text(" ");
            }
            _ => {}
        }
    }

    /// Route text to the innermost open container.
    fn push_text(&mut self, text: &str) {
        if let Some((_, alt)) = self.image.as_mut() {
            alt.push_str(text);
        } else if let Some((_, buffer)) = self.heading.as_mut() {
            buffer.push_str(text);
        } else if let Some(item) = self.item_stack.last_mut() {
            item.push_str(text);
        } else if let Some(buffer) = self.paragraph.as_mut() {
            buffer.push_str(text);
        }
    }

    fn flush_images(&mut self) {
        self.blocks.append(&mut self.pending_images);
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let doc = Document::parse("# Title\n\nSome *emphasized* text.\n\n## Section\n");
        assert_eq!(
            doc.blocks(),
            &[
                Block::Heading {
                    depth: 1,
                    text: "Title".to_string()
                },
                Block::Paragraph {
                    text: "Some emphasized text.".to_string()
                },
                Block::Heading {
                    depth: 2,
                    text: "Section".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_inline_code_flattened() {
        let doc = Document::parse("# T\n\nUses `html/foo` and [a link](https://x.test).\n");
        assert_eq!(
            doc.blocks()[1],
            Block::Paragraph {
                text: "Uses html/foo and a link.".to_string()
            }
        );
    }

    #[test]
    fn test_list_items() {
        let doc = Document::parse("# T\n\n- one\n- two\n  - nested\n");
        match &doc.blocks()[1] {
            Block::List { items } => {
                assert!(items.contains(&"one".to_string()));
                assert!(items.iter().any(|item| item.contains("nested")));
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_image_lifted_to_block() {
        let doc = Document::parse("# T\n\n![cover](https://img.test/c.png)\n\nText.\n");
        assert_eq!(doc.first_image_url(), Some("https://img.test/c.png"));
        // the image-only paragraph is kept, so the image is block index 2
        assert_eq!(doc.blocks()[1].kind(), "paragraph");
        assert_eq!(doc.blocks()[2].kind(), "image");
    }

    #[test]
    fn test_leading_image_paragraph_stays_first() {
        let doc = Document::parse("![cover](https://img.test/c.png)\n\n# Title\n");
        assert_eq!(doc.blocks()[0].kind(), "paragraph");
    }

    #[test]
    fn test_no_image() {
        let doc = Document::parse("# T\n\nNothing here.\n");
        assert_eq!(doc.first_image_url(), None);
    }

    #[test]
    fn test_soft_breaks_join_with_space() {
        let doc = Document::parse("# T\n\nline one\nline two\n");
        assert_eq!(
            doc.blocks()[1],
            Block::Paragraph {
                text: "line one line two".to_string()
            }
        );
    }

    mod load {
        use super::super::*;
        use tempfile::tempdir;

        #[tokio::test]
        async fn test_missing_file_preserves_not_found() {
            let dir = tempdir().unwrap();
            let err = load(dir.path(), "README.md").await.unwrap_err();
            assert_eq!(err.code(), Some("ENOENT"));
            assert_eq!(
                err.path(),
                Some(dir.path().join("README.md").as_path())
            );
        }

        #[tokio::test]
        async fn test_empty_file() {
            let dir = tempdir().unwrap();
            std::fs::write(dir.path().join("README.md"), "  \n\t\n").unwrap();
            let err = load(dir.path(), "README.md").await.unwrap_err();
            assert_eq!(err.to_string(), "Project README.md is empty");
            assert_eq!(
                err.path(),
                Some(dir.path().join("README.md").as_path())
            );
        }

        #[tokio::test]
        async fn test_suffixed_variant() {
            let dir = tempdir().unwrap();
            std::fs::write(dir.path().join("README.pt.md"), "# Título\n").unwrap();
            let (path, doc) = load(dir.path(), "README.pt.md").await.unwrap();
            assert!(path.ends_with("README.pt.md"));
            assert_eq!(doc.blocks().len(), 1);
        }
    }
}
