// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the service. Constants are organized by category.
//!
//! # Categories
//!
//! - **Server**: Bind address and upload size limits
//! - **LLM**: Provider endpoint, model and sampling settings

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Default maximum accepted request body size for uploads (20 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Minimum allowed upload limit (64 KiB).
pub const MIN_MAX_UPLOAD_BYTES: usize = 64 * 1024;

/// Maximum allowed upload limit (512 MiB).
pub const MAX_MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;

// ==========================================================================
// LLM Defaults
// ==========================================================================

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model used for claim verification.
pub const DEFAULT_LLM_MODEL: &str = "gpt-4";

/// Default sampling temperature.
pub const DEFAULT_LLM_TEMPERATURE: f32 = 0.2;

/// Minimum sampling temperature accepted by the provider.
pub const MIN_LLM_TEMPERATURE: f32 = 0.0;

/// Maximum sampling temperature accepted by the provider.
pub const MAX_LLM_TEMPERATURE: f32 = 2.0;

/// Default request timeout for provider calls (in seconds).
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_UPLOAD_BYTES > 0);
    assert!(MAX_MAX_UPLOAD_BYTES >= MIN_MAX_UPLOAD_BYTES);
    assert!(DEFAULT_MAX_UPLOAD_BYTES >= MIN_MAX_UPLOAD_BYTES);
    assert!(DEFAULT_MAX_UPLOAD_BYTES <= MAX_MAX_UPLOAD_BYTES);

    assert!(MIN_LLM_TEMPERATURE >= 0.0);
    assert!(MAX_LLM_TEMPERATURE > MIN_LLM_TEMPERATURE);
    assert!(DEFAULT_LLM_TEMPERATURE >= MIN_LLM_TEMPERATURE);
    assert!(DEFAULT_LLM_TEMPERATURE <= MAX_LLM_TEMPERATURE);

    assert!(DEFAULT_LLM_TIMEOUT_SECS > 0);
};
