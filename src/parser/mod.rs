//! Markdown-subset parsing: sanitization, line classification and inline
//! emphasis.

mod classify;
mod inline;
mod sanitize;

pub use classify::{classify, classify_line, BULLET_MARKERS};
pub use inline::{parse_spans, strip_emphasis, to_marked, EMPHASIS_MARKER};
pub use sanitize::{sanitize, SanitizeOptions, Sanitizer};
