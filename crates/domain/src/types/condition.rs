//! Tooth condition vocabulary
//!
//! The simulated injury the remedy is applied to. A session holds exactly one
//! condition until the user toggles it.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The simulated dental injury type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    /// Broken enamel with the pulp fully exposed
    #[default]
    BrokenTooth,
    /// Deep decay reaching the dentin
    Cavity,
}

impl Condition {
    /// Get all conditions for UI toggles
    pub fn all() -> &'static [Condition] {
        &[Condition::BrokenTooth, Condition::Cavity]
    }

    /// Get a display name for the condition
    pub fn display_name(&self) -> &'static str {
        match self {
            Condition::BrokenTooth => "Broken Tooth",
            Condition::Cavity => "Cavity",
        }
    }

    /// Label of the tissue the remedy actually touches
    pub fn exposed_tissue(&self) -> &'static str {
        match self {
            Condition::BrokenTooth => "Exposed Pulp",
            Condition::Cavity => "Decayed Dentin",
        }
    }

    /// How the character is framed when asking the model about a reaction
    pub fn prompt_framing(&self) -> &'static str {
        match self {
            Condition::BrokenTooth => {
                "hurt broken tooth with fully exposed raw nerve endings (pulp exposure)"
            }
            Condition::Cavity => {
                "tooth with a deep, decay-ridden cavity (caries) affecting the dentin and irritating the pulp"
            }
        }
    }

    /// Short educational tip shown alongside the reaction panel
    pub fn tip(&self) -> ConditionTip {
        match self {
            Condition::BrokenTooth => ConditionTip {
                title: "Why is air painful?",
                body: "When enamel breaks, temperature changes can directly stimulate the nerve endings inside the pulp.",
            },
            Condition::Cavity => ConditionTip {
                title: "Why do cavities hurt?",
                body: "Decay creates holes that trap food and bacteria, irritating the nerve and causing inflammation.",
            },
        }
    }
}

/// Title and body of a condition tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionTip {
    pub title: &'static str,
    pub body: &'static str,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Condition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "broken_tooth" | "broken" => Ok(Condition::BrokenTooth),
            "cavity" => Ok(Condition::Cavity),
            other => Err(DomainError::parse(format!("unknown condition '{}'", other))),
        }
    }
}
