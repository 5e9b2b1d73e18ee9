use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use thiserror::Error;

use super::gemini::GeminiProvider;
use super::rules::RuleBasedProvider;
use crate::config::{DashboardConfig, ProviderKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Cannot reach generative API at {0}")]
    Connection(String),

    #[error("Generative API returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Generative API returned no text")]
    EmptyResponse,
}

/// Source of assistant replies.
pub trait ResponseProvider: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    fn respond(&self, user_text: &str) -> Result<String, ProviderError>;
}

impl<T: ResponseProvider + ?Sized> ResponseProvider for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn respond(&self, user_text: &str) -> Result<String, ProviderError> {
        (**self).respond(user_text)
    }
}

/// Choose the provider named by `config`.
///
/// A remote provider without an API key, or whose HTTP client cannot be
/// built, degrades to the local rules.
pub fn build_provider(config: &DashboardConfig) -> Box<dyn ResponseProvider> {
    match config.provider {
        ProviderKind::Local => Box::new(RuleBasedProvider),
        ProviderKind::Remote => {
            let Some(api_key) = config.gemini_api_key.as_deref() else {
                tracing::warn!("No generative API key configured, using local rules");
                return Box::new(RuleBasedProvider);
            };
            match GeminiProvider::new(
                &config.gemini_base_url,
                api_key,
                &config.gemini_model,
                config.request_timeout,
            ) {
                Ok(provider) => {
                    tracing::info!(model = %config.gemini_model, "Using remote chat provider");
                    Box::new(provider)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Remote chat provider unavailable, using local rules");
                    Box::new(RuleBasedProvider)
                }
            }
        }
    }
}

/// Mock provider for testing. Returns a configurable response and counts calls.
#[derive(Debug)]
pub struct MockProvider {
    response: String,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl ResponseProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn respond(&self, _user_text: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.response.clone())
    }
}

/// Provider that always fails with the given error.
#[derive(Debug)]
pub struct FailingProvider {
    error: ProviderError,
}

impl FailingProvider {
    pub fn new(error: ProviderError) -> Self {
        Self { error }
    }
}

impl ResponseProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn respond(&self, _user_text: &str) -> Result<String, ProviderError> {
        Err(self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_kind_builds_rules() {
        let config = DashboardConfig {
            provider: ProviderKind::Local,
            ..DashboardConfig::default()
        };
        assert_eq!(build_provider(&config).name(), "local-rules");
    }

    #[test]
    fn remote_without_key_degrades_to_rules() {
        let config = DashboardConfig {
            provider: ProviderKind::Remote,
            gemini_api_key: None,
            ..DashboardConfig::default()
        };
        assert_eq!(build_provider(&config).name(), "local-rules");
    }

    #[test]
    fn remote_with_key_builds_gemini() {
        let config = DashboardConfig {
            provider: ProviderKind::Remote,
            gemini_api_key: Some("test-key".into()),
            ..DashboardConfig::default()
        };
        assert_eq!(build_provider(&config).name(), "gemini");
    }

    #[test]
    fn mock_counts_calls() {
        let mock = MockProvider::new("ok");
        assert_eq!(mock.respond("a").unwrap(), "ok");
        assert_eq!(mock.respond("b").unwrap(), "ok");
        assert_eq!(mock.calls(), 2);
    }

    #[test]
    fn failing_provider_returns_error() {
        let provider = FailingProvider::new(ProviderError::EmptyResponse);
        assert_eq!(provider.respond("hi"), Err(ProviderError::EmptyResponse));
    }
}
