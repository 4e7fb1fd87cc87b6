//! Port traits for infrastructure boundaries.
//!
//! The LLM is the only external dependency of the engine, so it is the only
//! port. Adapters (Gemini, Ollama) live next to this module.

mod error;
mod external;

pub use error::LlmError;
pub use external::{LlmPort, LlmRequest, LlmResponse, ResponseSchema};

#[cfg(test)]
pub use external::MockLlmPort;
