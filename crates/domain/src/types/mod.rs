//! Shared vocabulary types
//!
//! The fixed enumerations everything else is built from: conditions, remedies,
//! moods, animations, effects, verdicts, and the character's derived look.

pub mod character_look;
pub mod condition;
pub mod mood;
pub mod remedy;
pub mod verdict;

pub use character_look::{BodyTint, CharacterLook, EyeStyle};
pub use condition::{Condition, ConditionTip};
pub use mood::{Animation, Mood, VisualEffect};
pub use remedy::{KnownRemedy, Remedy};
pub use verdict::{Verdict, VerdictTone};
