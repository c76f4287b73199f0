//! Pipeline orchestration

use crate::chunking::{truncate_chars, Chunker};
use crate::config::PipelineConfig;
use crate::error::ExtractError;
use crate::parser::parse_reply;
use crate::prompt::PromptBuilder;
use crate::types::RunReport;
use std::time::Instant;
use termsheet_domain::{AccumulatedRecord, ChunkOutcome, CompletionError, CompletionProvider};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Runs the chunk-fetch-fold pipeline over extracted document text.
pub struct Pipeline<P: CompletionProvider> {
    provider: P,
    config: PipelineConfig,
}

impl<P: CompletionProvider> Pipeline<P> {
    /// Create a new pipeline over the given provider.
    pub fn new(provider: P, config: PipelineConfig) -> Self {
        Self { provider, config }
    }

    /// Run extraction over the full document text.
    ///
    /// A single linear pass with no resumable state: guard the text length,
    /// chunk, fetch each chunk's fields, fold outcomes in chunk-index order.
    /// Per-chunk failures are recovered; only insufficient input or a run
    /// where every chunk failed is fatal.
    pub async fn run(&self, text: &str) -> Result<RunReport, ExtractError> {
        let started = Instant::now();

        let trimmed = text.trim();
        let text_chars = trimmed.chars().count();
        if text_chars < self.config.min_text_len.max(1) {
            return Err(ExtractError::InsufficientText(
                text_chars,
                self.config.min_text_len,
            ));
        }

        let chunks = Chunker::new(self.config.chunk_size).chunk(text);
        info!("split text into {} chunks", chunks.len());

        let mut outcomes = Vec::with_capacity(chunks.len());
        let mut chunks_failed = 0;
        for (idx, chunk) in chunks.iter().enumerate() {
            debug!("processing chunk {}/{}", idx + 1, chunks.len());
            match self.fetch_chunk(chunk).await {
                Ok(outcome) => {
                    if outcome.is_empty() {
                        debug!("chunk {} yielded no fields", idx + 1);
                    }
                    outcomes.push(outcome);
                }
                Err(e) => {
                    warn!("chunk {} failed: {}", idx + 1, e);
                    chunks_failed += 1;
                }
            }
        }

        if outcomes.is_empty() {
            return Err(ExtractError::NoSuccessfulChunks);
        }

        // The fold must stay in chunk-index order: the collision rule
        // depends on which observation arrives first.
        let mut record = AccumulatedRecord::new();
        let mut parse_failures = 0;
        for outcome in &outcomes {
            if matches!(outcome, ChunkOutcome::ParseFailure { .. }) {
                parse_failures += 1;
            }
            record.fold(outcome);
        }

        info!(
            "resolved {} fields ({} of {} chunks failed, {} parse failures)",
            record.len(),
            chunks_failed,
            chunks.len(),
            parse_failures
        );

        Ok(RunReport {
            record,
            chunks_total: chunks.len(),
            chunks_failed,
            parse_failures,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Fetch and parse one chunk, retrying once at half size if the service
    /// rejects the request as over its token budget.
    async fn fetch_chunk(&self, chunk: &str) -> Result<ChunkOutcome, CompletionError> {
        let reply = match self.request(chunk).await {
            Ok(reply) => reply,
            Err(CompletionError::TokenLimit(msg)) => {
                warn!("request over token budget ({}), retrying at half size", msg);
                let half = truncate_chars(chunk, chunk.chars().count() / 2);
                match self.request(half).await {
                    Ok(reply) => reply,
                    // The one bounded retry is spent; any further failure is
                    // a transport failure for this chunk.
                    Err(e) => return Err(CompletionError::Transport(e.to_string())),
                }
            }
            Err(e) => return Err(e),
        };

        Ok(parse_reply(&reply))
    }

    /// Issue a single deadline-bounded request for one chunk.
    async fn request(&self, chunk: &str) -> Result<String, CompletionError> {
        let prompt = PromptBuilder::new(chunk);
        let system = prompt.system();
        let user = prompt.user();

        match timeout(
            self.config.request_timeout(),
            self.provider.complete(&system, &user),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(CompletionError::Transport(
                "request deadline elapsed".to_string(),
            )),
        }
    }
}
