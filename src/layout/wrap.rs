//! Greedy, width-aware line wrapping.
//!
//! Words are maximal runs of non-whitespace characters and may cross
//! emphasis boundaries (`**x**,` is one word). Before a word is appended the
//! whole candidate line is measured; if it no longer fits, the current line
//! is closed and the word starts the next one. A word that is wider than the
//! budget on its own is placed alone and flagged as overflow.

use crate::error::Result;
use crate::model::{push_merged, Span, WrappedLine};

use super::measure::{measure_checked, TextMeasurer, TextStyle};

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(Vec<Span>),
    Space(Vec<Span>),
}

/// Line wrapper bound to a width budget, font size and measurer.
pub struct Wrapper<'a> {
    measurer: &'a dyn TextMeasurer,
    max_width: f32,
    font_size: f32,
}

impl<'a> Wrapper<'a> {
    /// Create a wrapper.
    pub fn new(measurer: &'a dyn TextMeasurer, max_width: f32, font_size: f32) -> Self {
        Self {
            measurer,
            max_width,
            font_size,
        }
    }

    /// Width budget.
    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    /// Measure a span sequence, each span in its own emphasis.
    pub fn measure_spans(&self, spans: &[Span]) -> Result<f32> {
        let mut width = 0.0;
        for span in spans {
            let style = TextStyle::new(self.font_size, span.emphasis);
            width += measure_checked(self.measurer, &span.text, &style)?;
        }
        Ok(width)
    }

    /// Wrap spans into width-bounded lines.
    ///
    /// Input without any word yields a single empty line so the caller can
    /// still advance vertically.
    pub fn wrap(&self, spans: &[Span]) -> Result<Vec<WrappedLine>> {
        let mut lines = Vec::new();
        let mut current = WrappedLine::empty();
        let mut pending_space: Option<&[Span]> = None;

        let tokens = tokenize(spans);
        for token in &tokens {
            match token {
                Token::Space(pieces) => {
                    if !current.is_empty() {
                        pending_space = Some(pieces);
                    }
                }
                Token::Word(pieces) => {
                    let mut candidate = current.spans.clone();
                    if let Some(space) = pending_space.take() {
                        extend_merged(&mut candidate, space);
                    }
                    extend_merged(&mut candidate, pieces);
                    let width = self.measure_spans(&candidate)?;

                    if current.is_empty() || width <= self.max_width {
                        current.overflow = current.is_empty() && width > self.max_width;
                        current.spans = candidate;
                        current.width = width;
                        continue;
                    }

                    lines.push(std::mem::take(&mut current));
                    let width = self.measure_spans(pieces)?;
                    current = WrappedLine {
                        spans: pieces.clone(),
                        width,
                        overflow: width > self.max_width,
                    };
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        if lines.is_empty() {
            lines.push(WrappedLine::empty());
        }
        if lines.iter().any(|l| l.overflow) {
            log::debug!(
                "{} word(s) wider than {} placed on their own line",
                lines.iter().filter(|l| l.overflow).count(),
                self.max_width
            );
        }
        Ok(lines)
    }
}

/// Wrap spans with a one-off [`Wrapper`].
pub fn wrap_spans(
    spans: &[Span],
    max_width: f32,
    font_size: f32,
    measurer: &dyn TextMeasurer,
) -> Result<Vec<WrappedLine>> {
    Wrapper::new(measurer, max_width, font_size).wrap(spans)
}

fn extend_merged(target: &mut Vec<Span>, pieces: &[Span]) {
    for piece in pieces {
        push_merged(target, &piece.text, piece.emphasis);
    }
}

/// Split spans into alternating word and whitespace tokens, keeping the
/// emphasis of every fragment.
fn tokenize(spans: &[Span]) -> Vec<Token> {
    let mut tokens = Vec::new();
    for span in spans {
        let mut start = 0;
        let mut run_is_space: Option<bool> = None;
        for (i, c) in span.text.char_indices() {
            let is_space = c.is_whitespace();
            if let Some(previous) = run_is_space {
                if previous != is_space {
                    append_fragment(&mut tokens, &span.text[start..i], previous, span.emphasis);
                    start = i;
                }
            }
            run_is_space = Some(is_space);
        }
        if let Some(previous) = run_is_space {
            append_fragment(&mut tokens, &span.text[start..], previous, span.emphasis);
        }
    }
    tokens
}

fn append_fragment(tokens: &mut Vec<Token>, text: &str, is_space: bool, emphasis: bool) {
    match tokens.last_mut() {
        Some(Token::Space(pieces)) if is_space => push_merged(pieces, text, emphasis),
        Some(Token::Word(pieces)) if !is_space => push_merged(pieces, text, emphasis),
        _ => {
            let mut pieces = Vec::new();
            push_merged(&mut pieces, text, emphasis);
            tokens.push(if is_space {
                Token::Space(pieces)
            } else {
                Token::Word(pieces)
            });
        }
    }
}
