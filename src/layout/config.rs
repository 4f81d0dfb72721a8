//! Layout configuration.
//!
//! All lengths are in millimetres and all font sizes in points. The
//! defaults reproduce an A4 study-notes report: 10mm side margins, a 180mm
//! text column, 6mm body lines and a 20mm bottom break margin.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::MAX_HEADING_LEVEL;

/// Spacing and size of one heading level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingStyle {
    /// Gap above the heading (suppressed at the top of a page)
    pub space_before: f32,
    /// Font size in points
    pub font_size: f32,
    /// Height of each heading line
    pub line_height: f32,
    /// Gap below the heading
    pub space_after: f32,
}

impl HeadingStyle {
    /// Create a heading style.
    pub const fn new(space_before: f32, font_size: f32, line_height: f32, space_after: f32) -> Self {
        Self {
            space_before,
            font_size,
            line_height,
            space_after,
        }
    }
}

/// Page header geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderStyle {
    /// Title font size in points
    pub title_font_size: f32,
    /// Height of the title line
    pub title_height: f32,
    /// Gap between title and content
    pub space_after_title: f32,
    /// "Generated on" font size in points
    pub timestamp_font_size: f32,
    /// Height of the timestamp line (first page only)
    pub timestamp_height: f32,
    /// Gap after the timestamp line
    pub space_after_timestamp: f32,
}

impl HeaderStyle {
    /// A header that reserves no space.
    pub const fn none() -> Self {
        Self {
            title_font_size: 16.0,
            title_height: 0.0,
            space_after_title: 0.0,
            timestamp_font_size: 10.0,
            timestamp_height: 0.0,
            space_after_timestamp: 0.0,
        }
    }

    /// Vertical space reserved above the content.
    pub fn height(&self, with_timestamp: bool) -> f32 {
        let mut height = self.title_height + self.space_after_title;
        if with_timestamp {
            height += self.timestamp_height + self.space_after_timestamp;
        }
        height
    }
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            title_font_size: 16.0,
            title_height: 10.0,
            space_after_title: 10.0,
            timestamp_font_size: 10.0,
            timestamp_height: 5.0,
            space_after_timestamp: 10.0,
        }
    }
}

/// Options for page composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Page height
    pub page_height: f32,

    /// Left edge of the text column
    pub left_margin: f32,

    /// Top margin; the header starts here
    pub top_margin: f32,

    /// Bottom break margin; no line may end below `page_height - bottom_margin`
    pub bottom_margin: f32,

    /// Width of the text column
    pub max_line_width: f32,

    /// Body font size in points
    pub base_font_size: f32,

    /// Height of a paragraph or bullet line
    pub line_height: f32,

    /// Vertical advance for a blank source line
    pub blank_line_height: f32,

    /// Width of the bullet marker column
    pub bullet_indent: f32,

    /// Marker drawn in the bullet column
    pub bullet_marker: String,

    /// Page header geometry
    pub header: HeaderStyle,

    /// Style of the heading emitted for each section name
    pub section_heading: HeadingStyle,

    /// Gap between consecutive sections
    pub section_gap: f32,

    /// Styles for heading levels 1..=3
    pub headings: [HeadingStyle; MAX_HEADING_LEVEL as usize],

    /// Draw heading text emphasized regardless of inline markup
    pub heading_bold: bool,

    /// Run notation highlighting on body lines
    pub highlight_notation: bool,

    /// Also run notation highlighting on heading lines
    pub highlight_headings: bool,
}

impl LayoutConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page height.
    pub fn with_page_height(mut self, height: f32) -> Self {
        self.page_height = height;
        self
    }

    /// Set top and bottom margins.
    pub fn with_margins(mut self, top: f32, bottom: f32) -> Self {
        self.top_margin = top;
        self.bottom_margin = bottom;
        self
    }

    /// Set the left margin.
    pub fn with_left_margin(mut self, left: f32) -> Self {
        self.left_margin = left;
        self
    }

    /// Set the text column width.
    pub fn with_max_line_width(mut self, width: f32) -> Self {
        self.max_line_width = width;
        self
    }

    /// Set the body font size.
    pub fn with_base_font_size(mut self, size: f32) -> Self {
        self.base_font_size = size;
        self
    }

    /// Set the body line height.
    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    /// Set the blank line advance.
    pub fn with_blank_line_height(mut self, height: f32) -> Self {
        self.blank_line_height = height;
        self
    }

    /// Set the bullet column width.
    pub fn with_bullet_indent(mut self, indent: f32) -> Self {
        self.bullet_indent = indent;
        self
    }

    /// Set the page header geometry.
    pub fn with_header(mut self, header: HeaderStyle) -> Self {
        self.header = header;
        self
    }

    /// Set the section heading style.
    pub fn with_section_heading(mut self, style: HeadingStyle) -> Self {
        self.section_heading = style;
        self
    }

    /// Set the gap between sections.
    pub fn with_section_gap(mut self, gap: f32) -> Self {
        self.section_gap = gap;
        self
    }

    /// Set the style of a heading level (clamped into 1..=3).
    pub fn with_heading_style(mut self, level: u8, style: HeadingStyle) -> Self {
        let index = level.clamp(1, MAX_HEADING_LEVEL) as usize - 1;
        self.headings[index] = style;
        self
    }

    /// Enable or disable notation highlighting.
    pub fn with_highlighting(mut self, enabled: bool) -> Self {
        self.highlight_notation = enabled;
        self
    }

    /// Enable or disable notation highlighting on heading lines.
    pub fn with_heading_highlighting(mut self, enabled: bool) -> Self {
        self.highlight_headings = enabled;
        self
    }

    /// Enable or disable forced bold headings.
    pub fn with_bold_headings(mut self, bold: bool) -> Self {
        self.heading_bold = bold;
        self
    }

    /// Style for a heading level (clamped into 1..=3).
    pub fn heading_style(&self, level: u8) -> &HeadingStyle {
        &self.headings[level.clamp(1, MAX_HEADING_LEVEL) as usize - 1]
    }

    /// First content position on a page.
    pub fn content_top(&self, with_timestamp: bool) -> f32 {
        self.top_margin + self.header.height(with_timestamp)
    }

    /// Lowest position a line may reach.
    pub fn content_bottom(&self) -> f32 {
        self.page_height - self.bottom_margin
    }

    /// Width available to bullet text.
    pub fn bullet_text_width(&self) -> f32 {
        self.max_line_width - self.bullet_indent
    }

    /// Check that the configuration can produce pages.
    pub fn validate(&self) -> Result<()> {
        let mut lengths = vec![
            ("page_height".to_string(), self.page_height),
            ("max_line_width".to_string(), self.max_line_width),
            ("base_font_size".to_string(), self.base_font_size),
            ("line_height".to_string(), self.line_height),
            ("header.title_font_size".to_string(), self.header.title_font_size),
            ("header.timestamp_font_size".to_string(), self.header.timestamp_font_size),
        ];
        let mut offsets = vec![
            ("left_margin".to_string(), self.left_margin),
            ("top_margin".to_string(), self.top_margin),
            ("bottom_margin".to_string(), self.bottom_margin),
            ("blank_line_height".to_string(), self.blank_line_height),
            ("bullet_indent".to_string(), self.bullet_indent),
            ("section_gap".to_string(), self.section_gap),
            ("header.title_height".to_string(), self.header.title_height),
            ("header.space_after_title".to_string(), self.header.space_after_title),
            ("header.timestamp_height".to_string(), self.header.timestamp_height),
            ("header.space_after_timestamp".to_string(), self.header.space_after_timestamp),
        ];

        let mut styles = vec![("section_heading".to_string(), &self.section_heading)];
        for (i, style) in self.headings.iter().enumerate() {
            styles.push((format!("headings[{}]", i + 1), style));
        }
        for (prefix, style) in styles {
            lengths.push((format!("{}.font_size", prefix), style.font_size));
            lengths.push((format!("{}.line_height", prefix), style.line_height));
            offsets.push((format!("{}.space_before", prefix), style.space_before));
            offsets.push((format!("{}.space_after", prefix), style.space_after));
        }

        // NaN fails both comparisons, so test for the valid range.
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in offsets {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        if self.bullet_text_width() <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "bullet_indent {} leaves no room in a {} wide column",
                self.bullet_indent, self.max_line_width
            )));
        }

        if self.content_top(true) >= self.content_bottom() {
            return Err(Error::InvalidConfig(format!(
                "margins and header leave no room on a {} high page",
                self.page_height
            )));
        }

        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_height: 297.0,
            left_margin: 10.0,
            top_margin: 10.0,
            bottom_margin: 20.0,
            max_line_width: 180.0,
            base_font_size: 11.0,
            line_height: 6.0,
            blank_line_height: 5.0,
            bullet_indent: 10.0,
            bullet_marker: "•".to_string(),
            header: HeaderStyle::default(),
            section_heading: HeadingStyle::new(0.0, 14.0, 8.0, 5.0),
            section_gap: 10.0,
            headings: [
                HeadingStyle::new(5.0, 14.0, 8.0, 3.0),
                HeadingStyle::new(3.0, 12.0, 7.0, 2.0),
                HeadingStyle::new(2.0, 11.0, 6.0, 1.0),
            ],
            heading_bold: true,
            highlight_notation: true,
            highlight_headings: false,
        }
    }
}
