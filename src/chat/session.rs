use std::sync::Arc;

use chrono::NaiveDateTime;

use super::prompt::{APOLOGY_MESSAGE, WELCOME_MESSAGE};
use super::provider::ResponseProvider;
use super::rules::classify;
use super::ChatError;
use crate::clock::{Clock, IdGenerator, SystemClock, UuidIds};
use crate::config::FailureReply;
use crate::models::enums::Sender;
use crate::models::ChatMessage;

/// One chat conversation: an append-only transcript plus the provider that
/// answers it. `send` takes `&mut self`, so at most one request is in flight.
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    provider: Box<dyn ResponseProvider>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    failure_reply: FailureReply,
}

impl ChatSession {
    /// Session on the wall clock with random ids.
    pub fn new(provider: Box<dyn ResponseProvider>) -> Self {
        Self::with_parts(provider, Arc::new(SystemClock), Arc::new(UuidIds))
    }

    /// Session with injected time and id sources. Starts with the welcome message.
    pub fn with_parts(
        provider: Box<dyn ResponseProvider>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let mut session = Self {
            transcript: Vec::new(),
            provider,
            clock,
            ids,
            failure_reply: FailureReply::Apology,
        };
        session.push(Sender::Assistant, WELCOME_MESSAGE.to_string());
        session
    }

    pub fn with_failure_reply(mut self, failure_reply: FailureReply) -> Self {
        self.failure_reply = failure_reply;
        self
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.transcript.last()
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Append the user's message and the assistant's reply.
    ///
    /// Provider failures are logged and answered with the configured fallback
    /// reply; they never reach the caller. Only blank input is an error, and
    /// it leaves the transcript untouched.
    pub fn send(&mut self, user_text: &str) -> Result<&ChatMessage, ChatError> {
        let text = user_text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.push(Sender::User, text.to_string());

        let reply = match self.provider.respond(text) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "Chat provider failed, using fallback reply"
                );
                match self.failure_reply {
                    FailureReply::Apology => APOLOGY_MESSAGE.to_string(),
                    FailureReply::LocalRules => classify(text).response().to_string(),
                }
            }
        };

        Ok(self.push(Sender::Assistant, reply))
    }

    fn push(&mut self, sender: Sender, content: String) -> &ChatMessage {
        let message = ChatMessage {
            id: format!("{}-{}", self.ids.next_id(), sender.as_str()),
            content,
            sender,
            timestamp: self.next_timestamp(),
        };
        self.transcript.push(message);
        &self.transcript[self.transcript.len() - 1]
    }

    /// Current time, held at the previous message's time if the clock went back.
    fn next_timestamp(&self) -> NaiveDateTime {
        let now = self.clock.now();
        match self.transcript.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        }
    }
}
