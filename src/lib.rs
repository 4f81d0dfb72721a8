//! # notepage
//!
//! Text layout and pagination for study notes.
//!
//! This library takes semi-structured text (paragraphs, `#` headings, `-`
//! bullets, `**bold**` spans and math or science notation) and lays it out
//! onto fixed-size pages: word-wrapped lines, heading hierarchy, highlighted
//! notation, page breaks, headers and footers. Glyph metrics and the page
//! format stay outside: widths come from a [`TextMeasurer`] and drawing goes
//! to a [`RenderSink`].
//!
//! ## Quick Start
//!
//! ```
//! use notepage::{layout, Document, FixedWidthMeasurer, LayoutConfig};
//!
//! fn main() -> notepage::Result<()> {
//!     let doc = Document::study_notes(
//!         "Biology",
//!         None,
//!         Some("# Photosynthesis\n- light reactions\n- **Calvin** cycle"),
//!         None,
//!     );
//!
//!     let result = layout(&doc, &LayoutConfig::default(), &FixedWidthMeasurer::new(2.0))?;
//!     println!("{}", notepage::render::to_text(&result.pages));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Markup**: headings (three levels), bullets and balanced `**` emphasis
//! - **Notation highlighting**: equations, functions, decimals and symbols
//! - **Sanitizing**: residual tags and entities are removed before layout
//! - **Pluggable backends**: any [`RenderSink`]; [`PageRecorder`] records pages
//! - **Parallel batches**: [`layout_batch`] uses Rayon across documents

pub mod error;
pub mod highlight;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

use std::sync::Arc;

use rayon::prelude::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use highlight::{Highlighter, NotationRule};
pub use layout::{
    Composer, FixedWidthMeasurer, HeaderStyle, HeadingStyle, HeuristicMeasurer, LayoutConfig,
    TextMeasurer, TextStyle,
};
pub use model::{Document, DrawCommand, Line, LineKind, Page, Section, Span, WrappedLine};
pub use parser::{SanitizeOptions, Sanitizer};
pub use render::{JsonFormat, LayoutResult, LayoutStats, PageRecorder, RenderSink};

/// Lay out a document into recorded pages with the standard highlighter.
///
/// # Example
///
/// ```
/// use notepage::{layout, Document, FixedWidthMeasurer, LayoutConfig, Section};
///
/// let doc = Document::new("Notes").with_section(Section::with_text("Summary", "x = 5"));
/// let result = layout(&doc, &LayoutConfig::default(), &FixedWidthMeasurer::default()).unwrap();
/// assert_eq!(result.pages.len(), 1);
/// ```
pub fn layout(
    document: &Document,
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Result<LayoutResult> {
    let mut recorder = PageRecorder::new();
    let stats = layout_into(document, config, measurer, &mut recorder)?;
    Ok(LayoutResult::new(recorder.into_pages(), stats))
}

/// Lay out a document, sending draw instructions to `sink`.
pub fn layout_into(
    document: &Document,
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
    sink: &mut dyn RenderSink,
) -> Result<LayoutStats> {
    let highlighter = Highlighter::standard();
    let sanitizer = Sanitizer::default();
    Composer::new(config, measurer, &highlighter, &sanitizer).compose(document, sink)
}

/// Lay out many documents in parallel.
///
/// Results come back in input order; one failing document does not affect
/// the others.
pub fn layout_batch(
    documents: &[Document],
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Vec<Result<LayoutResult>> {
    Notepage::new()
        .with_config(config.clone())
        .batch_with(documents, measurer)
}

/// Builder bundling configuration, measurer, highlighter and sanitizer.
///
/// # Example
///
/// ```
/// use notepage::{Document, FixedWidthMeasurer, LayoutConfig, Notepage, Section};
///
/// let result = Notepage::new()
///     .with_measurer(FixedWidthMeasurer::new(2.0))
///     .with_config(LayoutConfig::default().with_max_line_width(120.0))
///     .layout(&Document::new("Notes").with_section(Section::with_text("Summary", "text")))?;
/// assert_eq!(result.stats.page_count, 1);
/// # Ok::<(), notepage::Error>(())
/// ```
#[derive(Clone)]
pub struct Notepage {
    config: LayoutConfig,
    measurer: Arc<dyn TextMeasurer>,
    highlighter: Highlighter,
    sanitizer: Sanitizer,
}

impl Notepage {
    /// Create a builder with default configuration and the heuristic measurer.
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
            measurer: Arc::new(HeuristicMeasurer::default()),
            highlighter: Highlighter::standard(),
            sanitizer: Sanitizer::default(),
        }
    }

    /// Set the layout configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the text measurer.
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Arc::new(measurer);
        self
    }

    /// Set the notation highlighter.
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Set sanitizer options.
    pub fn with_sanitize_options(mut self, options: SanitizeOptions) -> Self {
        self.sanitizer = Sanitizer::new(options);
        self
    }

    /// Disable notation highlighting; explicit `**` markup still applies.
    pub fn without_highlighting(mut self) -> Self {
        self.config.highlight_notation = false;
        self
    }

    /// Layout configuration in effect.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out a document into recorded pages.
    pub fn layout(&self, document: &Document) -> Result<LayoutResult> {
        self.layout_with(document, self.measurer.as_ref())
    }

    /// Lay out a document into a caller-supplied sink.
    pub fn layout_into(&self, document: &Document, sink: &mut dyn RenderSink) -> Result<LayoutStats> {
        self.composer(self.measurer.as_ref()).compose(document, sink)
    }

    /// Lay out a document, substituting the "No content available" notice
    /// when every section is empty.
    pub fn layout_or_notice(&self, document: &Document) -> Result<LayoutResult> {
        match self.layout(document) {
            Err(e) if e.is_empty_content() => {
                log::info!(
                    "{:?} has no content, laying out the fallback notice",
                    document.title
                );
                let mut notice = Document::fallback_notice(document.title.clone());
                notice.generated_at = document.generated_at;
                self.layout(&notice)
            }
            other => other,
        }
    }

    /// Lay out many documents in parallel, preserving input order.
    pub fn layout_batch(&self, documents: &[Document]) -> Vec<Result<LayoutResult>> {
        self.batch_with(documents, self.measurer.as_ref())
    }

    fn batch_with(
        &self,
        documents: &[Document],
        measurer: &dyn TextMeasurer,
    ) -> Vec<Result<LayoutResult>> {
        documents
            .par_iter()
            .map(|document| self.layout_with(document, measurer))
            .collect()
    }

    fn layout_with(&self, document: &Document, measurer: &dyn TextMeasurer) -> Result<LayoutResult> {
        let mut recorder = PageRecorder::new();
        let stats = self.composer(measurer).compose(document, &mut recorder)?;
        Ok(LayoutResult::new(recorder.into_pages(), stats))
    }

    fn composer<'a>(&'a self, measurer: &'a dyn TextMeasurer) -> Composer<'a> {
        Composer::new(&self.config, measurer, &self.highlighter, &self.sanitizer)
    }
}

impl Default for Notepage {
    fn default() -> Self {
        Self::new()
    }
}
