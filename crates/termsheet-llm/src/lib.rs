//! Termsheet Completion Provider Layer
//!
//! Implementations of the `CompletionProvider` trait from `termsheet-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic stub for testing
//! - `AzureOpenAiProvider`: Azure OpenAI chat-completions integration
//!
//! # Examples
//!
//! ```
//! use termsheet_llm::MockProvider;
//! use termsheet_domain::CompletionProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new(r#"{"WALA": "24"}"#);
//! let reply = provider.complete("system", "user").await.unwrap();
//! assert_eq!(reply, r#"{"WALA": "24"}"#);
//! # }
//! ```

#![warn(missing_docs)]

pub mod azure;
pub mod config;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use termsheet_domain::{CompletionError, CompletionProvider};

pub use azure::AzureOpenAiProvider;
pub use config::{MissingEnvVar, ServiceConfig};

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured replies without making any network calls. Replies
/// can be scripted as an ordered sequence, which matters here because the
/// pipeline's merge rule is chunk-order sensitive; once the script is
/// exhausted, every further call returns the fallback reply.
#[derive(Debug, Clone)]
pub struct MockProvider {
    fallback: String,
    script: Arc<Mutex<VecDeque<Result<String, CompletionError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider that returns the same reply for every call.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            fallback: reply.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider that plays back `replies` in order, then falls back
    /// to an empty JSON object.
    pub fn with_script(replies: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            fallback: "{}".to_string(),
            script: Arc::new(Mutex::new(replies.into())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `complete` was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl CompletionProvider for MockProvider {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, CompletionError> {
        *self.call_count.lock().unwrap() += 1;

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(reply) => reply,
            None => Ok(self.fallback.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_reply() {
        let provider = MockProvider::new("reply");
        assert_eq!(provider.complete("s", "u").await.unwrap(), "reply");
        assert_eq!(provider.complete("s", "u").await.unwrap(), "reply");
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_scripted_replies_in_order() {
        let provider = MockProvider::with_script(vec![
            Ok("first".to_string()),
            Err(CompletionError::Transport("connection refused".to_string())),
            Ok("third".to_string()),
        ]);

        assert_eq!(provider.complete("s", "u").await.unwrap(), "first");
        assert!(matches!(
            provider.complete("s", "u").await,
            Err(CompletionError::Transport(_))
        ));
        assert_eq!(provider.complete("s", "u").await.unwrap(), "third");
        // Script exhausted: fallback.
        assert_eq!(provider.complete("s", "u").await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_clone_shares_script_and_count() {
        let provider = MockProvider::with_script(vec![Ok("only".to_string())]);
        let clone = provider.clone();

        assert_eq!(clone.complete("s", "u").await.unwrap(), "only");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.complete("s", "u").await.unwrap(), "{}");
    }
}
