//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing service credentials
    #[error("{0}")]
    Env(#[from] termsheet_llm::MissingEnvVar),

    /// Pipeline error
    #[error("Extraction error: {0}")]
    Extract(#[from] termsheet_extractor::ExtractError),

    /// Rendering error
    #[error("Spreadsheet error: {0}")]
    Sheet(#[from] termsheet_sheet::SheetError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
