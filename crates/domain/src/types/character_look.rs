//! Static look of the tooth character derived from its mood
//!
//! Pure lookups a renderer uses to draw the face and body; no state of their own.

use serde::{Deserialize, Serialize};

use super::mood::Mood;

/// Shape of the character's eyes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EyeStyle {
    Open,
    Crossed,
    Wide,
    Closed,
}

/// Tint applied to the tooth body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyTint {
    Plain,
    Flushed,
    Chilled,
}

/// Everything about the character's appearance that follows from mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterLook {
    pub eyes: EyeStyle,
    pub body_tint: BodyTint,
    /// Whether the nerve throbs visibly (numbed nerves go grey and still)
    pub nerve_active: bool,
}

impl CharacterLook {
    pub fn for_mood(mood: Mood) -> Self {
        let eyes = match mood {
            Mood::Agony => EyeStyle::Crossed,
            Mood::Shock => EyeStyle::Wide,
            Mood::Relief | Mood::Numb => EyeStyle::Closed,
            Mood::Neutral => EyeStyle::Open,
        };
        let body_tint = match mood {
            Mood::Agony => BodyTint::Flushed,
            Mood::Numb => BodyTint::Chilled,
            _ => BodyTint::Plain,
        };
        Self {
            eyes,
            body_tint,
            nerve_active: mood != Mood::Numb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_per_mood() {
        let agony = CharacterLook::for_mood(Mood::Agony);
        assert_eq!(agony.eyes, EyeStyle::Crossed);
        assert_eq!(agony.body_tint, BodyTint::Flushed);
        assert!(agony.nerve_active);

        let numb = CharacterLook::for_mood(Mood::Numb);
        assert_eq!(numb.eyes, EyeStyle::Closed);
        assert_eq!(numb.body_tint, BodyTint::Chilled);
        assert!(!numb.nerve_active);

        assert_eq!(CharacterLook::for_mood(Mood::Shock).eyes, EyeStyle::Wide);
        assert_eq!(CharacterLook::for_mood(Mood::Neutral).eyes, EyeStyle::Open);
    }
}
