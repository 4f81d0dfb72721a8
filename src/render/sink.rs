//! Drawing interface between the composer and a rendering backend.
//!
//! The composer never touches a page format directly. It issues a stream of
//! instructions to a [`RenderSink`]; a PDF writer, a canvas or the built-in
//! [`PageRecorder`] decide what to do with them.
//!
//! # Example
//!
//! ```
//! use notepage::render::{PageRecorder, RenderSink};
//!
//! let mut recorder = PageRecorder::new();
//! recorder.new_page(1);
//! recorder.draw_text("Hello", 10.0, 30.0, 12.0);
//! recorder.stamp_footer(1);
//!
//! let pages = recorder.into_pages();
//! assert_eq!(pages[0].plain_text(), "Hello");
//! ```

use crate::model::{DrawCommand, Page};

/// Receiver of draw instructions.
///
/// Coordinates are in layout units measured from the top-left corner of the
/// page; `y` is the top of the line box.
pub trait RenderSink {
    /// Start page `number` (1-indexed). Subsequent instructions target it.
    fn new_page(&mut self, number: u32);

    /// Draw the page header: document title and, on the first page, the
    /// "Generated on" line.
    fn stamp_header(&mut self, title: &str, generated_on: Option<&str>) {
        let _ = (title, generated_on);
    }

    /// Switch the font size in points.
    fn set_font_size(&mut self, size: f32) {
        let _ = size;
    }

    /// Switch emphasis on or off.
    fn set_emphasis(&mut self, on: bool);

    /// Draw a text run.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, width: f32);

    /// Advance to the next line.
    fn new_line(&mut self, height: f32);

    /// Stamp the footer; the page receives no further instructions.
    fn stamp_footer(&mut self, page_number: u32);
}

/// Sink that records every instruction into [`Page`]s.
#[derive(Debug, Clone, Default)]
pub struct PageRecorder {
    pages: Vec<Page>,
}

impl PageRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded pages.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Take the recorded pages.
    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    fn record(&mut self, command: DrawCommand) {
        if self.pages.is_empty() {
            self.pages.push(Page::new(1));
        }
        if let Some(page) = self.pages.last_mut() {
            page.push(command);
        }
    }
}

impl RenderSink for PageRecorder {
    fn new_page(&mut self, number: u32) {
        self.pages.push(Page::new(number));
    }

    fn stamp_header(&mut self, title: &str, generated_on: Option<&str>) {
        self.record(DrawCommand::Header {
            title: title.to_string(),
            generated_on: generated_on.map(str::to_string),
        });
    }

    fn set_font_size(&mut self, size: f32) {
        self.record(DrawCommand::FontSize { size });
    }

    fn set_emphasis(&mut self, on: bool) {
        self.record(DrawCommand::Emphasis { on });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, width: f32) {
        self.record(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            width,
        });
    }

    fn new_line(&mut self, height: f32) {
        self.record(DrawCommand::NewLine { height });
    }

    fn stamp_footer(&mut self, page_number: u32) {
        self.record(DrawCommand::Footer { page_number });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_starts_page_lazily() {
        let mut recorder = PageRecorder::new();
        recorder.draw_text("x", 0.0, 0.0, 1.0);
        assert_eq!(recorder.pages().len(), 1);
        assert_eq!(recorder.pages()[0].number, 1);
    }

    #[test]
    fn test_replay_reproduces_pages() {
        let mut recorder = PageRecorder::new();
        recorder.new_page(1);
        recorder.stamp_header("Notes", Some("Generated on: today"));
        recorder.set_font_size(11.0);
        recorder.set_emphasis(true);
        recorder.draw_text("bold", 10.0, 45.0, 4.0);
        recorder.new_line(6.0);
        recorder.stamp_footer(1);
        recorder.new_page(2);
        recorder.stamp_footer(2);

        let mut copy = PageRecorder::new();
        for page in recorder.pages() {
            page.replay(&mut copy);
        }
        assert_eq!(copy.pages(), recorder.pages());
    }

    #[test]
    fn test_default_methods_are_optional() {
        struct Counter(usize);
        impl RenderSink for Counter {
            fn new_page(&mut self, _: u32) {}
            fn set_emphasis(&mut self, _: bool) {}
            fn draw_text(&mut self, _: &str, _: f32, _: f32, _: f32) {
                self.0 += 1;
            }
            fn new_line(&mut self, _: f32) {}
            fn stamp_footer(&mut self, _: u32) {}
        }

        let mut counter = Counter(0);
        counter.stamp_header("ignored", None);
        counter.set_font_size(12.0);
        counter.draw_text("a", 0.0, 0.0, 1.0);
        assert_eq!(counter.0, 1);
    }
}
