// SPDX-License-Identifier: MPL-2.0
//! This module handles the service configuration, loaded from a
//! `settings.toml` file and adjusted by environment variables.
//!
//! # Configuration Sections
//!
//! - `[server]` - Bind address and upload size limit
//! - `[llm]` - Chat-completion provider used for claim checking
//! - `[upload]` - Where uploads are staged before inspection
//!
//! # Path Resolution
//!
//! 1. Explicit path (`--config` CLI argument)
//! 2. `TRUTHCHECK_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory (`<config>/TruthCheck/settings.toml`)
//!
//! A missing file yields the defaults. A file that exists but does not parse
//! is an error: the service refuses to start on a broken config.
//!
//! # Environment Overrides
//!
//! A `.env` file in the working directory (or one of its parents) is loaded
//! into the process environment first, see [`load_dotenv`].
//!
//! - `OPENAI_API_KEY` sets `llm.api_key`
//! - `TRUTHCHECK_BIND_ADDR` sets `server.bind_addr`
//!
//! # Examples
//!
//! ```no_run
//! use truthcheck::config::{self, Config};
//!
//! let mut config = config::load(None).unwrap_or_default();
//! config.apply_env_overrides(|key| std::env::var(key).ok());
//! println!("listening on {}", config.server.bind_addr);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TruthCheck";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TRUTHCHECK_CONFIG_DIR";

/// Environment variable to override the bind address.
pub const ENV_BIND_ADDR: &str = "TRUTHCHECK_BIND_ADDR";

/// Environment variable holding the LLM provider API key.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

// =============================================================================
// Section Structs
// =============================================================================

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Maximum request body size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Chat-completion provider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`).
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// Model name.
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds.
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,

    /// API key. Usually supplied through `OPENAI_API_KEY` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            temperature: default_llm_temperature(),
            timeout_secs: default_llm_timeout_secs(),
            api_key: None,
        }
    }
}

/// Upload staging settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Directory for staged uploads. Defaults to the system temp dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging_dir: Option<PathBuf>,
}

// =============================================================================
// Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

impl Config {
    /// Applies environment overrides using `lookup` to read variables.
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = lookup(ENV_OPENAI_API_KEY) {
            self.llm.api_key = Some(key);
        }
        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            self.server.bind_addr = addr;
        }
    }

    /// Checks values that cannot be expressed through serde defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        if !(MIN_MAX_UPLOAD_BYTES..=MAX_MAX_UPLOAD_BYTES).contains(&self.server.max_upload_bytes) {
            return Err(Error::Config(format!(
                "server.max_upload_bytes must be between {MIN_MAX_UPLOAD_BYTES} and {MAX_MAX_UPLOAD_BYTES}, got {}",
                self.server.max_upload_bytes
            )));
        }
        if !(MIN_LLM_TEMPERATURE..=MAX_LLM_TEMPERATURE).contains(&self.llm.temperature) {
            return Err(Error::Config(format!(
                "llm.temperature must be between {MIN_LLM_TEMPERATURE} and {MAX_LLM_TEMPERATURE}, got {}",
                self.llm.temperature
            )));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Error::Config("llm.timeout_secs must be positive".into()));
        }
        if self.llm.base_url.trim().is_empty() {
            return Err(Error::Config("llm.base_url must not be empty".into()));
        }
        Ok(())
    }

    /// Parses the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the address is not a valid socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        Ok(self.server.bind_addr.parse()?)
    }
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_llm_base_url() -> String {
    DEFAULT_LLM_BASE_URL.to_string()
}

fn default_llm_model() -> String {
    DEFAULT_LLM_MODEL.to_string()
}

fn default_llm_temperature() -> f32 {
    DEFAULT_LLM_TEMPERATURE
}

fn default_llm_timeout_secs() -> u64 {
    DEFAULT_LLM_TIMEOUT_SECS
}

// =============================================================================
// Loading
// =============================================================================

/// Returns the default config file path.
///
/// Uses `TRUTHCHECK_CONFIG_DIR` if set and non-empty, otherwise the
/// platform config directory. Returns `None` if neither is available.
pub fn default_config_path() -> Option<PathBuf> {
    let dir = std::env::var(ENV_CONFIG_DIR)
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))?;
    Some(dir.join(CONFIG_FILE))
}

/// Loads the config from `path`, or from [`default_config_path`] when `None`.
///
/// # Errors
///
/// Returns an error if an explicit path does not exist, or if the file
/// cannot be read or parsed.
pub fn load(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load_from_path(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Loads the config from a specific file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
    Ok(toml::from_str(&content)?)
}

/// Loads variables from the nearest `.env` file into the process environment.
///
/// Variables already set in the environment are left untouched. Returns the
/// path of the loaded file, or `None` when there is no `.env` file.
///
/// # Errors
///
/// Returns [`Error::Config`] if a `.env` file exists but cannot be read or
/// parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    dotenv_outcome(dotenvy::dotenv())
}

fn dotenv_outcome(result: dotenvy::Result<PathBuf>) -> Result<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(Error::Config(format!("cannot load .env: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn serialized_config_loads_back_with_all_sections() {
        let mut config = Config::default();
        config.server.bind_addr = "0.0.0.0:9000".to_string();
        config.llm.model = "gpt-4o".to_string();
        config.upload.staging_dir = Some(PathBuf::from("/var/tmp/truthcheck"));

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let content = toml::to_string_pretty(&config).expect("failed to serialize config");
        fs::write(&config_path, content).expect("failed to write config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[llm]\nmodel = \"gpt-4o-mini\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.llm.model, "gpt-4o-mini");
        assert_eq!(loaded.llm.base_url, DEFAULT_LLM_BASE_URL);
        assert_eq!(loaded.server, ServerConfig::default());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("absent.toml");
        assert!(load(Some(&missing)).is_err());
    }

    #[test]
    fn missing_dotenv_file_is_not_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join(".env");

        let outcome = dotenv_outcome(dotenvy::from_path(&missing).map(|()| missing.clone()));
        assert!(matches!(outcome, Ok(None)));
    }

    #[test]
    fn malformed_dotenv_file_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dotenv_path = temp_dir.path().join(".env");
        fs::write(&dotenv_path, "NOT A VALID LINE\n").expect("failed to write .env");

        let outcome =
            dotenv_outcome(dotenvy::from_path(&dotenv_path).map(|()| dotenv_path.clone()));
        assert!(matches!(outcome, Err(Error::Config(_))));
    }

    #[test]
    fn env_overrides_replace_key_and_bind_addr() {
        let env: HashMap<&str, &str> = [
            (ENV_OPENAI_API_KEY, "sk-test"),
            (ENV_BIND_ADDR, "0.0.0.0:8080"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|_| Some("  ".to_string()));
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.server.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = Config::default();
        config.server.bind_addr = "nowhere".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.llm.temperature = 3.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.max_upload_bytes = 10;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.llm.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
