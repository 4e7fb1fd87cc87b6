//! Safety verdict for a remedy applied to a condition

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Safety categorization of a remedy for a given condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Safe")]
    Safe,
    #[serde(rename = "Unsafe")]
    Unsafe,
    #[serde(rename = "Use with Caution")]
    UseWithCaution,
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
}

impl Verdict {
    pub fn all() -> &'static [Verdict] {
        &[
            Verdict::Safe,
            Verdict::Unsafe,
            Verdict::UseWithCaution,
            Verdict::HighlyRecommended,
        ]
    }

    /// Wire name, as constrained in the model's response schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe",
            Verdict::Unsafe => "Unsafe",
            Verdict::UseWithCaution => "Use with Caution",
            Verdict::HighlyRecommended => "Highly Recommended",
        }
    }

    /// Badge tone for the verdict
    pub fn tone(&self) -> VerdictTone {
        match self {
            Verdict::Safe | Verdict::HighlyRecommended => VerdictTone::Positive,
            Verdict::UseWithCaution => VerdictTone::Caution,
            Verdict::Unsafe => VerdictTone::Danger,
        }
    }
}

/// How a verdict badge should be colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTone {
    Positive,
    Caution,
    Danger,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = DomainError;

    /// Strict decode, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verdict::all()
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("unknown verdict '{}'", s)))
    }
}
