//! Character mood, animation, and visual effect enumerations
//!
//! These are the rendering-facing vocabulary. Wire names match what a
//! renderer switches on: lowercase moods and animations, kebab-case effects.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotional state of the tooth character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Neutral,
    Agony,
    Relief,
    Shock,
    Numb,
}

impl Mood {
    pub fn all() -> &'static [Mood] {
        &[
            Mood::Neutral,
            Mood::Agony,
            Mood::Relief,
            Mood::Shock,
            Mood::Numb,
        ]
    }

    /// Wire name, as constrained in the model's response schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Agony => "agony",
            Mood::Relief => "relief",
            Mood::Shock => "shock",
            Mood::Numb => "numb",
        }
    }

    /// Animation and effect inferred from a mood alone.
    ///
    /// Used for custom remedies, whose visuals cannot be known up front.
    pub fn inferred_motion(&self) -> (Animation, VisualEffect) {
        match self {
            Mood::Relief => (Animation::Float, VisualEffect::Sparkles),
            Mood::Neutral => (Animation::Idle, VisualEffect::None),
            Mood::Agony => (Animation::Shiver, VisualEffect::Sweat),
            Mood::Shock => (Animation::Jolt, VisualEffect::Electric),
            Mood::Numb => (Animation::Sway, VisualEffect::None),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = DomainError;

    /// Strict decode: unknown moods are an error, never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::all()
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("unknown mood '{}'", s)))
    }
}

/// Body animation of the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    #[default]
    Idle,
    Shake,
    Throb,
    Float,
    Shiver,
    Sway,
    Jolt,
}

/// Overlay effect drawn around the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VisualEffect {
    #[default]
    None,
    Bubbles,
    Sparkles,
    AcidFumes,
    Electric,
    Sweat,
}
