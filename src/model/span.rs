//! Inline spans and width-bounded output lines.

use serde::{Deserialize, Serialize};

/// A contiguous run of text with a single emphasis state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// The text content
    pub text: String,

    /// Whether the run is drawn emphasized (bold)
    pub emphasis: bool,
}

impl Span {
    /// Create a span.
    pub fn new(text: impl Into<String>, emphasis: bool) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }

    /// Create a plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// Create an emphasized span.
    pub fn emphasized(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    /// Check if the span has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Concatenate span texts, dropping emphasis.
pub fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Append a span, merging it into the previous one when emphasis matches.
///
/// Empty spans are dropped.
pub fn push_merged(spans: &mut Vec<Span>, text: &str, emphasis: bool) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.emphasis == emphasis => last.text.push_str(text),
        _ => spans.push(Span::new(text, emphasis)),
    }
}

/// A wrapped output line whose measured width fits the width budget.
///
/// The only exception is a single word wider than the budget, which is
/// placed alone and flagged as `overflow`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WrappedLine {
    /// Spans in drawing order
    pub spans: Vec<Span>,

    /// Measured width of all spans
    pub width: f32,

    /// Set when a single word exceeds the width budget
    pub overflow: bool,
}

impl WrappedLine {
    /// An empty line that only consumes vertical space.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the line has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Plain text of the line.
    pub fn text(&self) -> String {
        spans_text(&self.spans)
    }

    /// Whitespace-delimited words of the line.
    pub fn words(&self) -> Vec<String> {
        self.text().split_whitespace().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_merged() {
        let mut spans = Vec::new();
        push_merged(&mut spans, "a", false);
        push_merged(&mut spans, "b", false);
        push_merged(&mut spans, "", true);
        push_merged(&mut spans, "c", true);
        assert_eq!(spans, vec![Span::plain("ab"), Span::emphasized("c")]);
        assert_eq!(spans_text(&spans), "abc");
    }

    #[test]
    fn test_wrapped_line_words() {
        let line = WrappedLine {
            spans: vec![Span::emphasized("x=5"), Span::plain(" and y")],
            width: 10.0,
            overflow: false,
        };
        assert_eq!(line.words(), vec!["x=5", "and", "y"]);
        assert!(WrappedLine::empty().is_empty());
    }
}
