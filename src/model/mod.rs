//! Document model types for study-note layout.
//!
//! The model covers both ends of the pipeline: the caller-built
//! [`Document`] that goes in, and the classified [`Line`]s, [`Span`]s,
//! [`WrappedLine`]s and finished [`Page`]s produced along the way.

mod document;
mod line;
mod page;
mod span;

pub use document::{Document, Section, EXTRACTED_TEXT, QUESTIONS, SUMMARY, TIMESTAMP_FORMAT};
pub use line::{Line, LineKind, MAX_HEADING_LEVEL};
pub use page::{DrawCommand, Page, PlacedText};
pub use span::{push_merged, spans_text, Span, WrappedLine};
