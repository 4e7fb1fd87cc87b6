//! Tagged decode of the model's structured answer.
//!
//! The schema sent to the backend is a request, not a guarantee. Every field
//! is checked here: pain is clamped into range, while missing fields, wrong
//! types, and enum values outside the vocabulary are errors that the resolver
//! turns into the fallback reaction.

use serde_json::{Map, Value};

use toothtutor_domain::{Mood, PainLevel, ReactionResult, Verdict};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReactionDecodeError {
    #[error("Invalid JSON in response: {0}")]
    InvalidJson(String),
    #[error("Response is not a JSON object")]
    NotAnObject,
    #[error("Missing or empty '{0}' field in response")]
    MissingField(&'static str),
    #[error("Field '{field}' has the wrong type")]
    WrongType { field: &'static str },
    #[error("Unrecognized {field} value '{value}'")]
    UnknownValue { field: &'static str, value: String },
}

/// Decode a reaction from raw model output.
pub fn decode_reaction(response: &str) -> Result<ReactionResult, ReactionDecodeError> {
    let json_str = extract_json(response);
    let parsed: Value = serde_json::from_str(json_str)
        .map_err(|e| ReactionDecodeError::InvalidJson(e.to_string()))?;
    let object = parsed.as_object().ok_or(ReactionDecodeError::NotAnObject)?;

    let pain_level = match object.get("painLevel") {
        None | Some(Value::Null) => return Err(ReactionDecodeError::MissingField("painLevel")),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => PainLevel::clamped(i),
            None => PainLevel::from_f64(n.as_f64().unwrap_or(f64::NAN)),
        },
        Some(_) => return Err(ReactionDecodeError::WrongType { field: "painLevel" }),
    };

    let verdict_raw = required_str(object, "verdict")?;
    let verdict = verdict_raw
        .parse::<Verdict>()
        .map_err(|_| ReactionDecodeError::UnknownValue {
            field: "verdict",
            value: verdict_raw.to_string(),
        })?;

    let mood_raw = required_str(object, "mood")?;
    let mood = mood_raw
        .parse::<Mood>()
        .map_err(|_| ReactionDecodeError::UnknownValue {
            field: "mood",
            value: mood_raw.to_string(),
        })?;

    Ok(ReactionResult {
        pain_level,
        sensation_description: required_str(object, "sensationDescription")?.to_string(),
        scientific_effect: required_str(object, "scientificEffect")?.to_string(),
        verdict,
        mood,
    })
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ReactionDecodeError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ReactionDecodeError::MissingField(field)),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(ReactionDecodeError::MissingField(field))
        }
        Some(Value::String(s)) => Ok(s.trim()),
        Some(_) => Err(ReactionDecodeError::WrongType { field }),
    }
}

/// Extract JSON from a response that might be wrapped in a markdown code block.
fn extract_json(response: &str) -> &str {
    if let Some(start) = response.find("```json") {
        if let Some(end) = response[start + 7..].find("```") {
            return response[start + 7..start + 7 + end].trim();
        }
    }

    if let Some(start) = response.find("```") {
        if let Some(end) = response[start + 3..].find("```") {
            return response[start + 3..start + 3 + end].trim();
        }
    }

    if let (Some(start), Some(end)) = (response.find('{'), response.rfind('}')) {
        if start < end {
            return &response[start..=end];
        }
    }

    response.trim()
}
