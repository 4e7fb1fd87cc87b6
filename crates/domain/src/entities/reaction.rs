//! Reaction result entity
//!
//! What a remedy does to the tooth, as judged by the model or by one of the
//! fixed tables below. Produced fresh per selection and never mutated.

use serde::{Deserialize, Serialize};

use crate::types::{Condition, Mood, Remedy, Verdict};
use crate::value_objects::PainLevel;

/// Structured reaction to a remedy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResult {
    pub pain_level: PainLevel,
    pub sensation_description: String,
    pub scientific_effect: String,
    pub verdict: Verdict,
    pub mood: Mood,
}

impl ReactionResult {
    /// Canned reaction when nothing has been applied.
    ///
    /// Keyed only by condition; the model is never consulted for it.
    pub fn untreated(condition: Condition) -> Self {
        match condition {
            Condition::BrokenTooth => Self {
                pain_level: PainLevel::clamped(5),
                sensation_description: "A sharp, shooting pain with every breath of air."
                    .to_string(),
                scientific_effect:
                    "The exposed pulp is directly vulnerable to air, temperature, and pressure."
                        .to_string(),
                verdict: Verdict::UseWithCaution,
                mood: Mood::Neutral,
            },
            Condition::Cavity => Self {
                pain_level: PainLevel::clamped(3),
                sensation_description: "A dull, persistent ache deep inside the tooth."
                    .to_string(),
                scientific_effect:
                    "Bacteria in the cavity are irritating the pulp, causing inflammation (pulpitis)."
                        .to_string(),
                verdict: Verdict::UseWithCaution,
                mood: Mood::Neutral,
            },
        }
    }

    /// Reaction shown when the model could not produce a usable answer.
    pub fn fallback(remedy: &Remedy) -> Self {
        Self {
            pain_level: PainLevel::clamped(5),
            sensation_description: format!("The tooth is unsure how to react to {}.", remedy),
            scientific_effect: "Data unavailable for this substance.".to_string(),
            verdict: Verdict::UseWithCaution,
            mood: Mood::Neutral,
        }
    }
}
