//! Gemini LLM client (Generative Language REST API)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse};

/// Client for Gemini's `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

/// Default Gemini base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model for Gemini.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

impl GeminiClient {
    /// Create a client. Without a timeout the transport's defaults apply.
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmPort for GeminiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = build_request(&request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(LlmError::request_failed)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .map_err(LlmError::request_failed)?;
            return Err(LlmError::RequestFailed(format!("{}: {}", status, error_text)));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(LlmError::invalid_response)?;

        convert_response(api_response)
    }
}

fn build_request(request: &LlmRequest) -> GenerateContentRequest {
    let contents = vec![Content {
        role: Some("user".to_string()),
        parts: vec![Part {
            text: Some(request.prompt.clone()),
        }],
    }];

    let schema = request.response_schema.as_ref();
    let generation_config = GenerationConfig {
        temperature: request.temperature,
        response_mime_type: schema.map(|_| "application/json".to_string()),
        response_schema: schema.map(|s| to_gemini_schema(&s.schema)),
    };

    GenerateContentRequest {
        contents,
        generation_config,
    }
}

/// Gemini spells schema types in upper case (`OBJECT`, `STRING`, ...).
fn to_gemini_schema(schema: &serde_json::Value) -> serde_json::Value {
    match schema {
        serde_json::Value::Object(map) => {
            let converted = map
                .iter()
                .map(|(key, value)| {
                    let value = match (key.as_str(), value) {
                        ("type", serde_json::Value::String(t)) => {
                            serde_json::Value::String(t.to_uppercase())
                        }
                        ("enum", _) | ("required", _) => value.clone(),
                        _ => to_gemini_schema(value),
                    };
                    (key.clone(), value)
                })
                .collect();
            serde_json::Value::Object(converted)
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(to_gemini_schema).collect())
        }
        other => other.clone(),
    }
}

fn convert_response(response: GenerateContentResponse) -> Result<LlmResponse, LlmError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::invalid_response("No candidates in Gemini response"))?;

    let content: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(LlmResponse::new(content))
}

// =============================================================================
// Gemini API types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
