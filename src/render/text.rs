//! Plain text preview of laid-out pages.

use crate::model::Page;

/// Render pages as a plain-text preview.
///
/// Each page starts with a `--- Page N ---` banner followed by its header
/// lines, its text lines and its footer.
pub fn to_text(pages: &[Page]) -> String {
    let mut output = String::new();
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("--- Page {} ---\n", page.number));
        if let Some((title, generated_on)) = page.header() {
            output.push_str(title);
            output.push('\n');
            if let Some(line) = generated_on {
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }
        for line in page.text_lines() {
            output.push_str(&line);
            output.push('\n');
        }
        if let Some(number) = page.footer() {
            output.push_str(&format!("\n[Page {}]\n", number));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DrawCommand;

    #[test]
    fn test_to_text() {
        let mut page = Page::new(1);
        page.push(DrawCommand::Header {
            title: "Biology".to_string(),
            generated_on: Some("Generated on: today".to_string()),
        });
        page.push(DrawCommand::Text {
            text: "Hello, world!".to_string(),
            x: 10.0,
            y: 45.0,
            width: 13.0,
        });
        page.push(DrawCommand::Footer { page_number: 1 });

        let result = to_text(&[page]);
        assert!(result.starts_with("--- Page 1 ---\nBiology\nGenerated on: today\n"));
        assert!(result.contains("Hello, world!\n"));
        assert!(result.ends_with("[Page 1]\n"));
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(to_text(&[]), "");
    }
}
