//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::future::Future;
use thiserror::Error;

/// Errors a completion backend can surface to the pipeline.
///
/// The pipeline's recovery policy depends on this classification: transport
/// errors skip the chunk, token-limit errors trigger one half-size retry,
/// and service errors are treated like transport failures.
#[derive(Error, Debug, Clone)]
pub enum CompletionError {
    /// The request did not complete (network failure, timeout, non-success
    /// HTTP status).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service rejected the request as exceeding its token budget.
    #[error("token limit exceeded: {0}")]
    TokenLimit(String),

    /// The service completed the request but reported an error of its own.
    #[error("service error: {0}")]
    Service(String),

    /// The response envelope was not in the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for completion service operations
///
/// Implemented by the infrastructure layer (termsheet-llm). The pipeline is
/// generic over this trait so merging and rendering can be tested with
/// deterministic stubs in place of the live service.
pub trait CompletionProvider {
    /// Send one system/user prompt pair and return the raw completion text.
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send;
}
