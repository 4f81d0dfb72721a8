//! Layout cursor.

/// Font state last sent to the sink.
///
/// `None` means nothing has been set on the current page yet, so the next
/// request always reaches the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FontContext {
    /// Current font size
    pub size: Option<f32>,
    /// Current emphasis
    pub emphasis: Option<bool>,
}

impl FontContext {
    /// Record a size; returns true when it differs from the current one.
    pub fn update_size(&mut self, size: f32) -> bool {
        if self.size == Some(size) {
            return false;
        }
        self.size = Some(size);
        true
    }

    /// Record an emphasis state; returns true when it changed.
    pub fn update_emphasis(&mut self, on: bool) -> bool {
        if self.emphasis == Some(on) {
            return false;
        }
        self.emphasis = Some(on);
        true
    }
}

/// Vertical position within the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// Current page (1-indexed)
    pub page: u32,
    /// Top of the next line box
    pub y: f32,
    /// Font state on this page
    pub font: FontContext,
    /// Lines placed on this page so far
    pub content_lines: u32,
}

impl Cursor {
    /// Cursor at the top of page 1.
    pub fn start(top: f32) -> Self {
        Self {
            page: 1,
            y: top,
            font: FontContext::default(),
            content_lines: 0,
        }
    }

    /// Move down by `height`.
    pub fn advance(&mut self, height: f32) {
        self.y += height;
    }

    /// Check if a block of `height` fits above `bottom`.
    pub fn fits(&self, height: f32, bottom: f32) -> bool {
        self.y + height <= bottom
    }

    /// Check if nothing has been placed on the page yet.
    pub fn is_fresh(&self) -> bool {
        self.content_lines == 0
    }

    /// Move to the top of the next page. Font state is reset because
    /// backends start every page with their own defaults.
    pub fn next_page(&mut self, top: f32) {
        self.page += 1;
        self.y = top;
        self.font = FontContext::default();
        self.content_lines = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_and_advance() {
        let mut cursor = Cursor::start(30.0);
        assert!(cursor.fits(6.0, 36.0));
        assert!(!cursor.fits(6.1, 36.0));
        cursor.advance(6.0);
        assert_eq!(cursor.y, 36.0);
    }

    #[test]
    fn test_next_page_resets_state() {
        let mut cursor = Cursor::start(45.0);
        cursor.font.update_size(11.0);
        cursor.content_lines = 3;
        cursor.next_page(30.0);
        assert_eq!(cursor.page, 2);
        assert_eq!(cursor.y, 30.0);
        assert!(cursor.is_fresh());
        assert_eq!(cursor.font, FontContext::default());
    }

    #[test]
    fn test_font_context_reports_changes() {
        let mut font = FontContext::default();
        assert!(font.update_size(11.0));
        assert!(!font.update_size(11.0));
        assert!(font.update_emphasis(false));
        assert!(font.update_emphasis(true));
        assert!(!font.update_emphasis(true));
    }
}
