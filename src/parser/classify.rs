//! Line classification: headings, bullets, paragraphs and blanks.

use crate::model::{Line, LineKind, MAX_HEADING_LEVEL};

/// Characters accepted as bullet markers when followed by whitespace.
pub const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// Split sanitized text into classified lines.
///
/// Blank lines are preserved as [`LineKind::Blank`].
pub fn classify(text: &str) -> Vec<Line> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(classify_line).collect()
}

/// Classify a single line.
///
/// The heading check runs first, so a `#` line is never taken for a bullet.
pub fn classify_line(raw: &str) -> Line {
    let line = raw.trim();
    if line.is_empty() {
        return Line::blank();
    }

    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes > 0 {
        // '#' is one byte, so the count doubles as a byte offset.
        let rest = &line[hashes..];
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            let level = hashes.min(MAX_HEADING_LEVEL as usize) as u8;
            return Line::heading(level, rest.trim());
        }
    }

    let mut chars = line.chars();
    if let Some(first) = chars.next() {
        if BULLET_MARKERS.contains(&first) {
            let rest = chars.as_str();
            if rest.starts_with(char::is_whitespace) {
                return Line::new(LineKind::Bullet, rest.trim());
            }
        }
    }

    Line::new(LineKind::Paragraph, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(classify_line("# Title"), Line::heading(1, "Title"));
        assert_eq!(classify_line("## Sub"), Line::heading(2, "Sub"));
        assert_eq!(classify_line("### Deep"), Line::heading(3, "Deep"));
    }

    #[test]
    fn test_heading_level_bound() {
        for n in 1..=8usize {
            let line = classify_line(&format!("{} text", "#".repeat(n)));
            assert_eq!(line.heading_level(), Some(n.min(3) as u8));
            assert_eq!(line.text, "text");
        }
    }

    #[test]
    fn test_bare_hash_is_empty_heading() {
        let line = classify_line("#");
        assert_eq!(line.kind, LineKind::Heading(1));
        assert_eq!(line.text, "");
        assert_eq!(classify_line("###").text, "");
    }

    #[test]
    fn test_hashtag_is_paragraph() {
        assert_eq!(classify_line("#rust").kind, LineKind::Paragraph);
    }

    #[test]
    fn test_bullets() {
        assert_eq!(classify_line("- one"), Line::new(LineKind::Bullet, "one"));
        assert_eq!(classify_line("* two"), Line::new(LineKind::Bullet, "two"));
        assert_eq!(classify_line("• three"), Line::new(LineKind::Bullet, "three"));
    }

    #[test]
    fn test_bold_is_not_bullet() {
        let line = classify_line("**bold** start");
        assert_eq!(line.kind, LineKind::Paragraph);
        assert_eq!(line.text, "**bold** start");
        assert_eq!(classify_line("-5 degrees").kind, LineKind::Paragraph);
    }

    #[test]
    fn test_classify_text() {
        let lines = classify("# Title\n- point one\n\nplain");
        let kinds: Vec<_> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Heading(1),
                LineKind::Bullet,
                LineKind::Blank,
                LineKind::Paragraph
            ]
        );
        assert!(classify("").is_empty());
    }
}
