// SPDX-License-Identifier: MPL-2.0
//! Claim fact-checking through an LLM provider.
//!
//! The provider is asked to answer in JSON; its reply is parsed as a JSON
//! value and handed back to the client unchanged.

use crate::application::port::{ClaimChecker, ClaimPrompt, LlmError};

/// System instruction sent with every claim.
pub const SYSTEM_PROMPT: &str = "You are a fact-checking assistant.";

/// Builds the chat prompt for a claim.
#[must_use]
pub fn build_prompt(claim: &str) -> ClaimPrompt {
    ClaimPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user: format!("Analyze the claim below and respond with JSON: {claim}"),
    }
}

/// Parses the provider's reply text into a JSON value.
///
/// # Errors
///
/// Returns [`LlmError::InvalidReply`] if the trimmed reply is not JSON.
pub fn parse_reply(reply: &str) -> Result<serde_json::Value, LlmError> {
    serde_json::from_str(reply.trim()).map_err(|e| LlmError::InvalidReply(e.to_string()))
}

/// Asks the provider to fact-check `claim` and parses its answer.
///
/// # Errors
///
/// Returns an [`LlmError`] if the provider call fails or the reply is not JSON.
pub async fn verify_claim(
    checker: &dyn ClaimChecker,
    claim: &str,
) -> Result<serde_json::Value, LlmError> {
    let prompt = build_prompt(claim);
    let reply = checker.complete(&prompt).await?;
    parse_reply(&reply)
}
