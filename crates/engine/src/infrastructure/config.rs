//! Engine configuration read from environment variables.
//!
//! `.env` files are loaded by `main` before this runs; every value has a
//! default except the Gemini API key.

use std::time::Duration;

use crate::infrastructure::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::infrastructure::ollama::{DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL};

/// Sampling temperature favoring low variance.
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Which LLM backend answers reaction requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmProvider {
    #[default]
    Gemini,
    Ollama,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub llm_provider: LlmProvider,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    /// None leaves the HTTP client's own defaults in place
    pub llm_timeout: Option<Duration>,
    pub temperature: f32,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Option<String>,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let llm_provider = match get("LLM_PROVIDER").as_deref().map(str::to_lowercase) {
            None => LlmProvider::Gemini,
            Some(p) if p == "gemini" => LlmProvider::Gemini,
            Some(p) if p == "ollama" => LlmProvider::Ollama,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "LLM_PROVIDER",
                    value: other,
                })
            }
        };

        let llm_timeout = match get("LLM_TIMEOUT_SECS").or_else(|| get("GEMINI_TIMEOUT_SECS")) {
            None => None,
            Some(raw) => Some(Duration::from_secs(raw.parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue {
                    key: "LLM_TIMEOUT_SECS",
                    value: raw.clone(),
                }
            })?)),
        };

        let temperature = match get("LLM_TEMPERATURE") {
            None => DEFAULT_TEMPERATURE,
            Some(raw) => raw
                .parse::<f32>()
                .ok()
                .filter(|t| (0.0..=2.0).contains(t))
                .ok_or(ConfigError::InvalidValue {
                    key: "LLM_TEMPERATURE",
                    value: raw,
                })?,
        };

        let server_port = match get("SERVER_PORT").or_else(|| get("PORT")) {
            None => 3000,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: raw.clone(),
            })?,
        };

        Ok(Self {
            llm_provider,
            gemini_api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            ollama_base_url: get("OLLAMA_BASE_URL")
                .or_else(|| get("OLLAMA_URL"))
                .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string()),
            ollama_model: get("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
            llm_timeout,
            temperature,
            server_host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        })
    }
}
