//! Completion service configuration

use thiserror::Error;

/// A required environment variable was not set.
#[derive(Error, Debug)]
#[error("missing environment variable: {0}")]
pub struct MissingEnvVar(pub &'static str);

/// Credentials and endpoint configuration for the completion service.
///
/// Read from the environment once per run and passed explicitly into the
/// provider; nothing in the pipeline reads process-wide state after this.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Endpoint base, e.g. `https://example.openai.azure.com`.
    pub endpoint: String,
    /// API key sent in the `api-key` header.
    pub api_key: String,
    /// Deployment (model) identifier.
    pub deployment: String,
    /// API version query parameter, e.g. `2024-08-01-preview`.
    pub api_version: String,
}

impl ServiceConfig {
    /// Load the configuration from `API_KEY`, `AZURE_ENDPOINT`,
    /// `DEPLOYMENT_NAME`, and `API_VERSION`.
    pub fn from_env() -> Result<Self, MissingEnvVar> {
        Ok(Self {
            endpoint: require("AZURE_ENDPOINT")?,
            api_key: require("API_KEY")?,
            deployment: require("DEPLOYMENT_NAME")?,
            api_version: require("API_VERSION")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, MissingEnvVar> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MissingEnvVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_is_reported_by_name() {
        let err = require("TERMSHEET_TEST_UNSET_VAR").unwrap_err();
        assert!(err.to_string().contains("TERMSHEET_TEST_UNSET_VAR"));
    }
}
