//! Inline emphasis parsing.
//!
//! Emphasis is delimited by paired `**` markers. Pairing is balanced and
//! non-nested: each marker closes the one before it. When the count is odd
//! the last marker stays in the text as literal characters, so an
//! unterminated marker never swallows the rest of the line.

use crate::model::{push_merged, spans_text, Span};

/// The emphasis delimiter.
pub const EMPHASIS_MARKER: &str = "**";

/// Split text into plain and emphasized spans.
///
/// Empty spans are dropped and neighbours with equal emphasis are merged,
/// so concatenating the result equals the input minus paired markers.
pub fn parse_spans(text: &str) -> Vec<Span> {
    let markers: Vec<usize> = text
        .match_indices(EMPHASIS_MARKER)
        .map(|(i, _)| i)
        .collect();
    let paired = markers.len() - markers.len() % 2;

    let mut spans = Vec::new();
    let mut cursor = 0;
    for pair in markers[..paired].chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        push_merged(&mut spans, &text[cursor..open], false);
        push_merged(&mut spans, &text[open + EMPHASIS_MARKER.len()..close], true);
        cursor = close + EMPHASIS_MARKER.len();
    }
    push_merged(&mut spans, &text[cursor..], false);
    spans
}

/// Text with paired markers removed.
pub fn strip_emphasis(text: &str) -> String {
    spans_text(&parse_spans(text))
}

/// Render spans back to marked-up text, e.g. for diagnostics.
pub fn to_marked(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        if span.emphasis {
            out.push_str(EMPHASIS_MARKER);
            out.push_str(&span.text);
            out.push_str(EMPHASIS_MARKER);
        } else {
            out.push_str(&span.text);
        }
    }
    out
}
