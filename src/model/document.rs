//! Document-level types.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Format used for the "Generated on" line of the first page header.
pub const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %I:%M %p";

/// Section name for raw text recovered from the source material.
pub const EXTRACTED_TEXT: &str = "Extracted Text";

/// Section name for the condensed summary.
pub const SUMMARY: &str = "Summary";

/// Section name for generated study questions.
pub const QUESTIONS: &str = "Questions";

/// A document to be laid out: a title and ordered, named sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Title stamped into every page header
    pub title: String,

    /// Sections in output order
    pub sections: Vec<Section>,

    /// Generation time shown on the first page (None = omitted)
    pub generated_at: Option<DateTime<Local>>,
}

impl Document {
    /// Create a new document with no sections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            generated_at: None,
        }
    }

    /// Build the standard three-section study-notes document.
    ///
    /// Extracted text is typeset one point smaller than the other sections.
    pub fn study_notes(
        title: impl Into<String>,
        extracted_text: Option<&str>,
        summary: Option<&str>,
        questions: Option<&str>,
    ) -> Self {
        let mut doc = Self::new(title);
        doc.add_section(
            Section::new(EXTRACTED_TEXT, extracted_text.map(str::to_string)).with_font_size(10.0),
        );
        doc.add_section(Section::new(SUMMARY, summary.map(str::to_string)));
        doc.add_section(Section::new(QUESTIONS, questions.map(str::to_string)));
        doc
    }

    /// Notice document substituted when nothing else could be laid out.
    pub fn fallback_notice(title: impl Into<String>) -> Self {
        let mut doc = Self::new(title);
        doc.add_section(Section::with_text(
            "No content available",
            "Please ensure that the document processing is complete before downloading the PDF.",
        ));
        doc
    }

    /// Append a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Builder-style section append.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Set the generation timestamp.
    pub fn with_timestamp(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Formatted generation timestamp, if one is set.
    pub fn timestamp_label(&self) -> Option<String> {
        self.generated_at
            .map(|at| format!("Generated on: {}", at.format(TIMESTAMP_FORMAT)))
    }

    /// Sections that carry non-whitespace content.
    pub fn non_empty_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.is_empty())
    }

    /// Check if every section is empty.
    pub fn is_empty(&self) -> bool {
        self.non_empty_sections().next().is_none()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("Document Summary")
    }
}

/// A named section of raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Name emitted as the section heading
    pub name: String,

    /// Raw, unsanitized content
    pub content: Option<String>,

    /// Body font size override in points
    pub font_size: Option<f32>,
}

impl Section {
    /// Create a section with optional content.
    pub fn new(name: impl Into<String>, content: Option<String>) -> Self {
        Self {
            name: name.into(),
            content,
            font_size: None,
        }
    }

    /// Create a section with content.
    pub fn with_text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(name, Some(content.into()))
    }

    /// Set the body font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Raw content or the empty string.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Check if the section has nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }
}
