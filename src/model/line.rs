//! Classified source lines.

use serde::{Deserialize, Serialize};

/// Deepest heading level; deeper markers collapse to it.
pub const MAX_HEADING_LEVEL: u8 = 3;

/// Kind of a logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "level", rename_all = "snake_case")]
pub enum LineKind {
    /// `#`-style heading, level 1..=3
    Heading(u8),
    /// `-` / `*` bullet item
    Bullet,
    /// Ordinary paragraph text
    Paragraph,
    /// Empty line
    Blank,
}

/// One unit of sanitized input with its classification.
///
/// Markers (`#`, `-`) are already stripped from `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Line kind
    pub kind: LineKind,

    /// Text without the block marker
    pub text: String,
}

impl Line {
    /// Create a line.
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a heading, clamping the level into 1..=3.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(LineKind::Heading(level.clamp(1, MAX_HEADING_LEVEL)), text)
    }

    /// Create a blank line.
    pub fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }

    /// Heading level, if this is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            LineKind::Heading(level) => Some(level),
            _ => None,
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self.kind, LineKind::Heading(_))
    }

    /// Check if this is a bullet.
    pub fn is_bullet(&self) -> bool {
        self.kind == LineKind::Bullet
    }

    /// Check if this is a blank line.
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_clamp() {
        assert_eq!(Line::heading(0, "a").heading_level(), Some(1));
        assert_eq!(Line::heading(6, "a").heading_level(), Some(3));
        assert_eq!(Line::blank().heading_level(), None);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&Line::heading(2, "Intro")).unwrap();
        assert!(json.contains("\"type\":\"heading\""));
        assert!(json.contains("\"level\":2"));
    }
}
