//! Layout result with pages and statistics.

use serde::{Deserialize, Serialize};

use crate::model::Page;

/// Result of laying out a document with the recording sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Recorded pages in order
    pub pages: Vec<Page>,

    /// Layout statistics
    pub stats: LayoutStats,
}

impl LayoutResult {
    /// Create a new layout result.
    pub fn new(pages: Vec<Page>, stats: LayoutStats) -> Self {
        Self { pages, stats }
    }

    /// Number of pages produced.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Plain text of every page, separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(Page::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Statistics collected while composing pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Pages emitted
    pub page_count: u32,

    /// Non-empty sections laid out
    pub section_count: u32,

    /// Heading lines (not counting section headings)
    pub heading_count: u32,

    /// Bullet items
    pub bullet_count: u32,

    /// Paragraph lines before wrapping
    pub paragraph_count: u32,

    /// Blank source lines
    pub blank_count: u32,

    /// Wrapped output lines drawn
    pub line_count: u32,

    /// Emphasized spans drawn
    pub emphasized_span_count: u32,

    /// Lines holding a single word wider than the column
    pub overflow_count: u32,
}

impl LayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &LayoutStats) {
        self.page_count += other.page_count;
        self.section_count += other.section_count;
        self.heading_count += other.heading_count;
        self.bullet_count += other.bullet_count;
        self.paragraph_count += other.paragraph_count;
        self.blank_count += other.blank_count;
        self.line_count += other.line_count;
        self.emphasized_span_count += other.emphasized_span_count;
        self.overflow_count += other.overflow_count;
    }
}
