//! External service port traits (LLM).

use async_trait::async_trait;

use super::error::LlmError;

// =============================================================================
// LLM Types
// =============================================================================

/// A single-turn generation request
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    /// The user prompt
    pub prompt: String,
    /// Temperature for response generation (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// When set, the backend must answer with JSON matching this schema
    pub response_schema: Option<ResponseSchema>,
}

impl LlmRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            response_schema: None,
        }
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn with_response_schema(mut self, schema: ResponseSchema) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// A JSON schema the structured answer must follow.
///
/// The schema is written in lowercase JSON-schema style (`"type": "object"`);
/// adapters translate it to their backend's dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    /// Short identifier, required by some backends
    pub name: String,
    pub schema: serde_json::Value,
}

impl ResponseSchema {
    pub fn new(name: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// Response from the LLM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmResponse {
    /// The generated text content
    pub content: String,
}

impl LlmResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}
