//! Text measurement.
//!
//! Glyph metrics belong to the rendering backend, so the layout engine only
//! sees a [`TextMeasurer`]. Any `Fn(&str, &TextStyle) -> f32` closure is a
//! measurer, which keeps tests free of real fonts.

use crate::error::{Error, Result};

/// Millimetres per typographic point.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Font state a run is measured and drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f32,
    /// Bold / emphasized
    pub emphasis: bool,
}

impl TextStyle {
    /// Create a text style.
    pub fn new(font_size: f32, emphasis: bool) -> Self {
        Self {
            font_size,
            emphasis,
        }
    }
}

/// Width measurement capability supplied by the rendering backend.
///
/// Implementations must be pure: the same text and style always yield the
/// same width, and concurrent calls are allowed.
pub trait TextMeasurer: Send + Sync {
    /// Rendered width of `text` in layout units.
    fn measure(&self, text: &str, style: &TextStyle) -> Result<f32>;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &TextStyle) -> f32 + Send + Sync,
{
    fn measure(&self, text: &str, style: &TextStyle) -> Result<f32> {
        Ok(self(text, style))
    }
}

/// Measure and reject negative or non-finite widths.
pub fn measure_checked(measurer: &dyn TextMeasurer, text: &str, style: &TextStyle) -> Result<f32> {
    let width = measurer.measure(text, style)?;
    if !width.is_finite() || width < 0.0 {
        return Err(Error::InvalidMeasurement {
            text: text.to_string(),
            width,
        });
    }
    Ok(width)
}

/// Synthetic fixed-width measurer: every character has the same advance,
/// whatever the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMeasurer {
    /// Advance of a plain character
    pub char_width: f32,
    /// Advance of an emphasized character
    pub emphasis_char_width: f32,
}

impl FixedWidthMeasurer {
    /// Same advance for plain and emphasized text.
    pub fn new(char_width: f32) -> Self {
        Self {
            char_width,
            emphasis_char_width: char_width,
        }
    }

    /// Use a different advance for emphasized text.
    pub fn with_emphasis_width(mut self, width: f32) -> Self {
        self.emphasis_char_width = width;
        self
    }
}

impl Default for FixedWidthMeasurer {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TextMeasurer for FixedWidthMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Result<f32> {
        let advance = if style.emphasis {
            self.emphasis_char_width
        } else {
            self.char_width
        };
        Ok(text.chars().count() as f32 * advance)
    }
}

/// Proportional measurer approximating a Helvetica-like sans serif.
///
/// Glyphs fall into width classes in em units; the sum is scaled by the
/// point size and converted to millimetres. Bold text runs slightly wider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMeasurer {
    /// Extra width factor for emphasized text
    pub bold_scale: f32,
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self { bold_scale: 1.06 }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Result<f32> {
        let em_sum: f32 = text.chars().map(glyph_em_width).sum();
        let scale = if style.emphasis { self.bold_scale } else { 1.0 };
        Ok(em_sum * style.font_size * PT_TO_MM * scale)
    }
}

fn glyph_em_width(ch: char) -> f32 {
    match ch {
        ' ' | '\u{00A0}' => 0.28,
        'i' | 'j' | 'l' | '|' | '!' | '\'' => 0.22,
        '.' | ',' | ':' | ';' => 0.28,
        'f' | 't' | 'r' | 'I' => 0.30,
        '(' | ')' | '[' | ']' | '{' | '}' | '-' => 0.33,
        '"' | '*' | '^' => 0.36,
        'm' | 'M' => 0.83,
        'w' | 'W' | '@' => 0.80,
        '%' => 0.89,
        '•' => 0.35,
        c if c.is_ascii_digit() => 0.56,
        c if c.is_ascii_uppercase() => 0.68,
        c if c.is_ascii_lowercase() => 0.52,
        c if c.is_whitespace() => 0.28,
        c if c.is_ascii_punctuation() => 0.50,
        _ => 0.60,
    }
}
