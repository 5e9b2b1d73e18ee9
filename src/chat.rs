//! First-aid chat assistant.
//!
//! A `ChatSession` owns the transcript and asks one `ResponseProvider` for
//! each reply. Providers are either the hosted generative API
//! (`GeminiProvider`) or the local keyword rules (`RuleBasedProvider`),
//! picked from config by `build_provider`.

pub mod gemini;
pub mod prompt;
pub mod provider;
pub mod rules;
pub mod session;

pub use gemini::GeminiProvider;
pub use provider::{build_provider, FailingProvider, MockProvider, ProviderError, ResponseProvider};
pub use rules::{classify, FirstAidTopic, RuleBasedProvider};
pub use session::ChatSession;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,
}
