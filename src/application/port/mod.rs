// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so the application layer stays
//! independent of concrete EXIF parsers and LLM providers.
//!
//! # Available Ports
//!
//! - [`llm`]: Chat completion for claim fact-checking
//! - [`metadata`]: Metadata tag extraction (EXIF)
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so one adapter can serve all requests
//! - Methods return `Result` with port-specific error types

pub mod llm;
pub mod metadata;

// Re-export main types for convenience
pub use llm::{ClaimChecker, ClaimPrompt, LlmError};
pub use metadata::{ExtractionError, TagExtractor};
