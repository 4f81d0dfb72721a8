//! Error types for notepage library.

use thiserror::Error;

/// Result type alias for notepage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout.
///
/// Malformed markup never produces an error: unterminated emphasis, empty
/// headings and over-wide words all degrade gracefully. Only the conditions
/// below are surfaced to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// The text measurer returned a width that is negative or not finite.
    #[error("Invalid measurement for {text:?}: {width}")]
    InvalidMeasurement {
        /// Text that was measured
        text: String,
        /// Width returned by the measurer
        width: f32,
    },

    /// The text measurer itself failed, e.g. a missing font in the backend.
    #[error("Measurement error: {0}")]
    Measurement(String),

    /// Every section of the document was empty after processing.
    #[error("Document has no content to lay out")]
    EmptyContent,

    /// The layout configuration cannot produce pages.
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// Error during rendering (text preview, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether the caller should substitute a fallback notice page.
    pub fn is_empty_content(&self) -> bool {
        matches!(self, Error::EmptyContent)
    }
}
