//! Remedy vocabulary
//!
//! A remedy is either one of the fixed known substances (including the
//! "no remedy" sentinel) or arbitrary free text typed by the user. Identity is
//! the string value itself: a custom string that spells a known name exactly
//! *is* that known remedy.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known substances with a deterministic, predefined physical reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownRemedy {
    /// Sentinel: nothing applied to the tooth
    NoRemedy,
    HydrogenPeroxide,
    RubbingAlcohol,
    Orajel,
    Vinegar,
    SaltWater,
    Toothpaste,
    Mouthwash,
    BakingSoda,
}

impl KnownRemedy {
    /// Every known remedy, sentinel first
    pub fn all() -> &'static [KnownRemedy] {
        &[
            KnownRemedy::NoRemedy,
            KnownRemedy::HydrogenPeroxide,
            KnownRemedy::RubbingAlcohol,
            KnownRemedy::Orajel,
            KnownRemedy::Vinegar,
            KnownRemedy::SaltWater,
            KnownRemedy::Toothpaste,
            KnownRemedy::Mouthwash,
            KnownRemedy::BakingSoda,
        ]
    }

    /// The string identity of the remedy
    pub fn name(&self) -> &'static str {
        match self {
            KnownRemedy::NoRemedy => "None",
            KnownRemedy::HydrogenPeroxide => "Hydrogen Peroxide",
            KnownRemedy::RubbingAlcohol => "Rubbing Alcohol",
            KnownRemedy::Orajel => "Orajel (Benzocaine)",
            KnownRemedy::Vinegar => "Vinegar",
            KnownRemedy::SaltWater => "Warm Salt Water",
            KnownRemedy::Toothpaste => "Toothpaste",
            KnownRemedy::Mouthwash => "Mouthwash (Alcohol-based)",
            KnownRemedy::BakingSoda => "Baking Soda Paste",
        }
    }

    /// Exact match on the identity string
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.name() == name)
    }

    /// Selectable substances whose name contains `query` (case-insensitive).
    ///
    /// The query is matched as typed, surrounding whitespace included. The
    /// sentinel is never offered as a search result.
    pub fn search(query: &str) -> Vec<KnownRemedy> {
        let needle = query.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .filter(|r| *r != KnownRemedy::NoRemedy)
            .filter(|r| r.name().to_lowercase().contains(&needle))
            .collect()
    }
}

impl fmt::Display for KnownRemedy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A substance the user applies to the simulated tooth
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Remedy {
    Known(KnownRemedy),
    Custom(String),
}

impl Remedy {
    /// The "no remedy" sentinel
    pub fn none() -> Self {
        Remedy::Known(KnownRemedy::NoRemedy)
    }

    /// Parse user input into a remedy.
    ///
    /// Input is trimmed. Exact known names resolve to the known remedy,
    /// anything else becomes a custom remedy. Empty input is rejected.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Remedy cannot be empty"));
        }
        Ok(match KnownRemedy::from_name(trimmed) {
            Some(known) => Remedy::Known(known),
            None => Remedy::Custom(trimmed.to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Remedy::Known(known) => known.name(),
            Remedy::Custom(text) => text,
        }
    }

    pub fn is_none_sentinel(&self) -> bool {
        matches!(self, Remedy::Known(KnownRemedy::NoRemedy))
    }

    pub fn known(&self) -> Option<KnownRemedy> {
        match self {
            Remedy::Known(known) => Some(*known),
            Remedy::Custom(_) => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Remedy::Custom(_))
    }
}

impl Default for Remedy {
    fn default() -> Self {
        Remedy::none()
    }
}

impl From<KnownRemedy> for Remedy {
    fn from(known: KnownRemedy) -> Self {
        Remedy::Known(known)
    }
}

impl TryFrom<String> for Remedy {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Remedy::parse(&value)
    }
}

impl From<Remedy> for String {
    fn from(remedy: Remedy) -> Self {
        match remedy {
            Remedy::Known(known) => known.name().to_string(),
            Remedy::Custom(text) => text,
        }
    }
}

impl fmt::Display for Remedy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names_exactly() {
        assert_eq!(
            Remedy::parse("Hydrogen Peroxide").unwrap(),
            Remedy::Known(KnownRemedy::HydrogenPeroxide)
        );
        assert_eq!(
            Remedy::parse("  Orajel (Benzocaine) ").unwrap(),
            Remedy::Known(KnownRemedy::Orajel)
        );
        assert!(Remedy::parse("None").unwrap().is_none_sentinel());
    }

    #[test]
    fn test_parse_custom_remedy() {
        let remedy = Remedy::parse("  Hot Sauce ").unwrap();
        assert_eq!(remedy, Remedy::Custom("Hot Sauce".to_string()));
        assert!(remedy.is_custom());
        assert_eq!(remedy.as_str(), "Hot Sauce");

        // Near-misses of a known name stay custom
        assert!(Remedy::parse("hydrogen peroxide").unwrap().is_custom());
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert!(matches!(Remedy::parse("   "), Err(DomainError::Validation(_))));
        assert!(Remedy::parse("").is_err());
    }

    #[test]
    fn test_known_names_round_trip() {
        for known in KnownRemedy::all() {
            assert_eq!(KnownRemedy::from_name(known.name()), Some(*known));
        }
    }

    #[test]
    fn test_search_excludes_sentinel_and_ignores_case() {
        let all = KnownRemedy::search("");
        assert_eq!(all.len(), KnownRemedy::all().len() - 1);
        assert!(!all.contains(&KnownRemedy::NoRemedy));

        let alcohol = KnownRemedy::search("ALCOHOL");
        assert_eq!(
            alcohol,
            vec![KnownRemedy::RubbingAlcohol, KnownRemedy::Mouthwash]
        );

        assert!(KnownRemedy::search("lemon").is_empty());
    }

    #[test]
    fn test_search_matches_query_as_typed() {
        assert_eq!(KnownRemedy::search(" salt water"), vec![KnownRemedy::SaltWater]);
        assert!(KnownRemedy::search("vinegar ").is_empty());
    }

    #[test]
    fn test_remedy_serializes_as_identity_string() {
        let json = serde_json::to_string(&Remedy::from(KnownRemedy::Vinegar)).unwrap();
        assert_eq!(json, "\"Vinegar\"");

        let custom: Remedy = serde_json::from_str("\"Ice Cream\"").unwrap();
        assert_eq!(custom, Remedy::Custom("Ice Cream".to_string()));

        assert!(serde_json::from_str::<Remedy>("\"  \"").is_err());
    }
}
