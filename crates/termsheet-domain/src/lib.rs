//! Termsheet Domain Layer
//!
//! Core data model for covenant field extraction: the canonical field list,
//! per-chunk extraction outcomes, the accumulated record with its fold rule,
//! and the typed-value classification used at render time.
//!
//! ## Key Concepts
//!
//! - **FieldSpec**: the fixed list of covenant fields the system extracts
//! - **ChunkOutcome**: one chunk's extraction result (fields or parse failure)
//! - **AccumulatedRecord**: the merged result of all chunk extractions
//! - **TypedValue**: the classified form of a raw extracted string
//!
//! ## Architecture
//!
//! This crate holds pure business logic plus the `CompletionProvider` trait
//! boundary. Infrastructure (HTTP clients, PDF parsing, spreadsheet I/O)
//! lives in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fields;
pub mod outcome;
pub mod record;
pub mod traits;
pub mod value;

// Re-exports for convenience
pub use fields::FieldSpec;
pub use outcome::ChunkOutcome;
pub use record::{AccumulatedRecord, PARSE_FAILURE_KEY};
pub use traits::{CompletionError, CompletionProvider};
pub use value::TypedValue;
