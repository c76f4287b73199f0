//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum chunk size (characters). Chunk boundaries are purely
    /// positional.
    pub chunk_size: usize,

    /// Minimum extracted text length (characters); shorter documents abort
    /// before any remote call.
    pub min_text_len: usize,

    /// Per-request deadline (seconds); an elapsed deadline counts as a
    /// transport failure for that chunk.
    pub request_timeout_secs: u64,

    /// Completion token budget per request.
    pub max_completion_tokens: u32,
}

impl PipelineConfig {
    /// Get the per-request deadline as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.max_completion_tokens == 0 {
            return Err("max_completion_tokens must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 3_000,
            min_text_len: 100,
            request_timeout_secs: 60,
            max_completion_tokens: 1_200,
        }
    }
}
