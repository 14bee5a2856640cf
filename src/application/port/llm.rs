// SPDX-License-Identifier: MPL-2.0
//! LLM completion port definition.
//!
//! This module defines the [`ClaimChecker`] trait through which claim
//! verification reaches an external chat-completion provider.
//!
//! # Design Notes
//!
//! - The port returns the raw reply text; parsing it is the caller's job
//! - Completions are async because adapters perform network I/O; the
//!   returned future is boxed so the trait stays object safe

use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// LlmError
// =============================================================================

/// Errors that can occur while asking the LLM provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// No API key was configured.
    MissingApiKey,

    /// The request could not be sent or the response could not be read.
    Request(String),

    /// The provider answered with a non-success status.
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, as returned by the provider.
        body: String,
    },

    /// The provider returned no choices.
    EmptyReply,

    /// The reply text is not a JSON value.
    InvalidReply(String),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::MissingApiKey => write!(f, "No API key provided"),
            LlmError::Request(msg) => write!(f, "Request failed: {msg}"),
            LlmError::Status { code, body } => write!(f, "Provider returned {code}: {body}"),
            LlmError::EmptyReply => write!(f, "Provider returned no choices"),
            LlmError::InvalidReply(msg) => write!(f, "Reply is not valid JSON: {msg}"),
        }
    }
}

impl std::error::Error for LlmError {}

// =============================================================================
// ClaimPrompt
// =============================================================================

/// A two-message chat prompt: a system instruction and the user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimPrompt {
    pub system: String,
    pub user: String,
}

// =============================================================================
// ClaimChecker Trait
// =============================================================================

/// Port for chat-completion providers used to fact-check claims.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one checker is shared by all
/// request handlers.
pub trait ClaimChecker: Send + Sync {
    /// Sends the prompt and returns the text of the first reply choice.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the provider is unreachable, misconfigured,
    /// or replies with an error status or no choices.
    fn complete<'a>(&'a self, prompt: &'a ClaimPrompt) -> BoxFuture<'a, Result<String, LlmError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[test]
    fn llm_error_display() {
        assert_eq!(format!("{}", LlmError::MissingApiKey), "No API key provided");

        let err = LlmError::Status {
            code: 429,
            body: "rate limited".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("429"));
        assert!(display.contains("rate limited"));

        let err = LlmError::Request("connection refused".to_string());
        assert!(format!("{err}").contains("connection refused"));
    }

    struct EchoChecker;

    impl ClaimChecker for EchoChecker {
        fn complete<'a>(
            &'a self,
            prompt: &'a ClaimPrompt,
        ) -> BoxFuture<'a, Result<String, LlmError>> {
            async move { Ok(prompt.user.clone()) }.boxed()
        }
    }

    #[tokio::test]
    async fn checker_is_object_safe() {
        let checker: Box<dyn ClaimChecker> = Box::new(EchoChecker);
        let prompt = ClaimPrompt {
            system: "sys".to_string(),
            user: "hello".to_string(),
        };
        assert_eq!(checker.complete(&prompt).await, Ok("hello".to_string()));
    }
}
