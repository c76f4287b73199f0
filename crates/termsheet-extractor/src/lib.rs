//! Termsheet Extractor
//!
//! Turns a PDF offering document into an [`AccumulatedRecord`] of covenant
//! field values via a completion service.
//!
//! # Architecture
//!
//! ```text
//! PDF → text → chunks → (completion service × N) → fold → AccumulatedRecord
//! ```
//!
//! The pipeline is generic over [`termsheet_domain::CompletionProvider`], so
//! everything downstream of the remote call can be tested with deterministic
//! stubs.
//!
//! # Key behaviors
//!
//! - **Positional chunking**: fixed character windows, no word or sentence
//!   awareness; concatenating the chunks reproduces the text exactly.
//! - **Per-chunk recovery**: a transport failure skips the chunk; a
//!   token-limit rejection is retried once at half the chunk size; an
//!   unparseable reply folds the parse-failure marker into the record.
//! - **Ordered fold**: outcomes are merged in strict chunk-index order, which
//!   fixes how conflicting observations concatenate.
//!
//! # Example
//!
//! ```no_run
//! use termsheet_extractor::{Pipeline, PipelineConfig};
//! use termsheet_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{"WALA": "24"}"#);
//! let pipeline = Pipeline::new(provider, PipelineConfig::default());
//!
//! let text = termsheet_extractor::extract_text("offering.pdf".as_ref())?;
//! let report = pipeline.run(&text).await?;
//! println!("resolved {} fields", report.record.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod error;
mod parser;
mod pipeline;
mod prompt;
mod text;
mod types;


pub use chunking::Chunker;
pub use config::PipelineConfig;
pub use error::ExtractError;
pub use parser::parse_reply;
pub use pipeline::Pipeline;
pub use prompt::PromptBuilder;
pub use text::extract_text;
pub use types::RunReport;
