//! Page-level types.

use serde::{Deserialize, Serialize};

use crate::render::RenderSink;

/// Horizontal slack below which two runs on one line are treated as touching.
const JOIN_EPSILON: f32 = 0.01;

/// A laid-out page: the draw instructions that target it, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Draw instructions in emission order
    pub commands: Vec<DrawCommand>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            commands: Vec::new(),
        }
    }

    /// Add a draw instruction.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Page number stamped into the footer, once the page is finalized.
    pub fn footer(&self) -> Option<u32> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Footer { page_number } => Some(*page_number),
            _ => None,
        })
    }

    /// Check if the footer has been stamped.
    pub fn is_finalized(&self) -> bool {
        self.footer().is_some()
    }

    /// Header title and optional generation line.
    pub fn header(&self) -> Option<(&str, Option<&str>)> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Header {
                title,
                generated_on,
            } => Some((title.as_str(), generated_on.as_deref())),
            _ => None,
        })
    }

    /// Text runs with their resolved font state.
    pub fn placed_text(&self) -> Vec<PlacedText<'_>> {
        let mut emphasis = false;
        let mut font_size = 0.0;
        let mut out = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::Emphasis { on } => emphasis = *on,
                DrawCommand::FontSize { size } => font_size = *size,
                DrawCommand::Text { text, x, y, width } => out.push(PlacedText {
                    text,
                    x: *x,
                    y: *y,
                    width: *width,
                    emphasis,
                    font_size,
                }),
                _ => {}
            }
        }
        out
    }

    /// Text grouped into visual lines (runs sharing a baseline).
    ///
    /// Runs separated by horizontal space are joined with a single space.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let mut current_y: Option<f32> = None;
        let mut line_end = 0.0f32;
        for run in self.placed_text() {
            if current_y != Some(run.y) {
                lines.push(String::new());
                current_y = Some(run.y);
            } else if run.x > line_end + JOIN_EPSILON {
                if let Some(line) = lines.last_mut() {
                    line.push(' ');
                }
            }
            if let Some(line) = lines.last_mut() {
                line.push_str(run.text);
            }
            line_end = run.x + run.width;
        }
        lines
    }

    /// Plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.text_lines().join("\n")
    }

    /// Number of text lines on the page.
    pub fn line_count(&self) -> usize {
        self.text_lines().len()
    }

    /// Check if the page carries no text.
    pub fn is_empty(&self) -> bool {
        !self
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { .. }))
    }

    /// Replay the recorded instructions into another sink.
    pub fn replay(&self, sink: &mut dyn RenderSink) {
        sink.new_page(self.number);
        for command in &self.commands {
            match command {
                DrawCommand::Header {
                    title,
                    generated_on,
                } => sink.stamp_header(title, generated_on.as_deref()),
                DrawCommand::FontSize { size } => sink.set_font_size(*size),
                DrawCommand::Emphasis { on } => sink.set_emphasis(*on),
                DrawCommand::Text { text, x, y, width } => sink.draw_text(text, *x, *y, *width),
                DrawCommand::NewLine { height } => sink.new_line(*height),
                DrawCommand::Footer { page_number } => sink.stamp_footer(*page_number),
            }
        }
    }
}

/// A single draw instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Page header: document title and, on the first page, the generation line
    Header {
        /// Document title
        title: String,
        /// "Generated on: ..." label
        generated_on: Option<String>,
    },

    /// Switch font size (points)
    FontSize {
        /// Size in points
        size: f32,
    },

    /// Switch emphasis on or off
    Emphasis {
        /// New emphasis state
        on: bool,
    },

    /// Draw a run of text
    Text {
        /// Text content
        text: String,
        /// Left edge
        x: f32,
        /// Top of the line box
        y: f32,
        /// Measured width consumed
        width: f32,
    },

    /// Advance to the next line
    NewLine {
        /// Vertical advance
        height: f32,
    },

    /// Page footer with the page number
    Footer {
        /// 1-indexed page number
        page_number: u32,
    },
}

/// A text run with the emphasis and font size in effect when it was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedText<'a> {
    /// Text content
    pub text: &'a str,
    /// Left edge
    pub x: f32,
    /// Top of the line box
    pub y: f32,
    /// Measured width
    pub width: f32,
    /// Emphasis state
    pub emphasis: bool,
    /// Font size in points
    pub font_size: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(t: &str, x: f32, y: f32, width: f32) -> DrawCommand {
        DrawCommand::Text {
            text: t.to_string(),
            x,
            y,
            width,
        }
    }

    #[test]
    fn test_text_lines_groups_by_y() {
        let mut page = Page::new(1);
        page.push(DrawCommand::Emphasis { on: true });
        page.push(text("bold", 10.0, 30.0, 4.0));
        page.push(DrawCommand::Emphasis { on: false });
        page.push(text(" normal", 14.0, 30.0, 7.0));
        page.push(text("•", 10.0, 36.0, 1.0));
        page.push(text("item", 20.0, 36.0, 4.0));

        assert_eq!(page.text_lines(), vec!["bold normal", "• item"]);
        let runs = page.placed_text();
        assert!(runs[0].emphasis);
        assert!(!runs[1].emphasis);
        assert!(!page.is_finalized());
    }

    #[test]
    fn test_footer_and_header() {
        let mut page = Page::new(2);
        assert!(page.is_empty());
        page.push(DrawCommand::Header {
            title: "Notes".to_string(),
            generated_on: None,
        });
        page.push(DrawCommand::Footer { page_number: 2 });
        assert_eq!(page.footer(), Some(2));
        assert_eq!(page.header(), Some(("Notes", None)));
    }
}
