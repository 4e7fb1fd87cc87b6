//! Error types for port operations.

/// Errors from an LLM backend.
///
/// The reaction resolver never lets these escape: every variant is turned into
/// the fallback reaction at its boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    /// Transport failure or non-success status from the backend
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    /// The backend answered but the envelope could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The backend answered without any text
    #[error("Empty response from LLM")]
    EmptyResponse,
}

impl LlmError {
    pub fn request_failed(message: impl ToString) -> Self {
        Self::RequestFailed(message.to_string())
    }

    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }
}
