//! Error types for font acquisition and PDF assembly.

/// Why one font source could not be used. Always recovered by moving on to
/// the next source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("font request failed: status {status}")]
    Status { status: u16 },

    /// The request never produced a response.
    #[error("font request failed: {0}")]
    Transport(String),

    /// No response within the configured timeout.
    #[error("font request timed out after {millis} ms")]
    TimedOut { millis: u64 },

    /// The body was too small to be a real font.
    #[error("font payload too small: {len} bytes (minimum {min})")]
    Undersized { len: usize, min: usize },
}

/// Errors that abort an export.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The downloaded font could not be embedded.
    #[error("font embedding failed for {family}: {message}")]
    FontEmbed { family: String, message: String },

    /// The PDF writer rejected the document.
    #[error("PDF assembly failed: {0}")]
    Pdf(String),
}
