//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that abort a pipeline run.
///
/// Per-chunk failures (transport, parse) are recovered inside the pipeline
/// and never surface here; these variants are the fatal cases.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The PDF could not be read or decoded.
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    /// Text extraction produced empty or insufficient content. Raised before
    /// any remote call is made.
    #[error("extracted text too short: {0} chars (minimum: {1})")]
    InsufficientText(usize, usize),

    /// Every chunk failed at the transport level; nothing was extracted.
    #[error("no chunk produced a successful response")]
    NoSuccessfulChunks,
}
