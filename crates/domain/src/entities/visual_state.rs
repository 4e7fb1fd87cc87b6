//! Visual state of the tooth character
//!
//! The rendering-facing projection of a reaction. Two fixed tables drive it:
//! an optimistic table keyed by remedy (shown before the reaction arrives) and
//! the mood table on [`Mood::inferred_motion`] (used to reconcile custom
//! remedies once the model has judged them).

use serde::{Deserialize, Serialize};

use crate::entities::ReactionResult;
use crate::types::{Animation, KnownRemedy, Mood, Remedy, VisualEffect};
use crate::value_objects::PainLevel;

/// What the character currently looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualState {
    pub pain_level: PainLevel,
    pub mood: Mood,
    pub animation: Animation,
    pub visual_effect: VisualEffect,
}

impl VisualState {
    /// State before any selection: a throbbing, neutral tooth.
    pub fn initial() -> Self {
        Self {
            pain_level: PainLevel::default(),
            mood: Mood::Neutral,
            animation: Animation::Throb,
            visual_effect: VisualEffect::None,
        }
    }

    /// Provisional state shown while the reaction is pending.
    ///
    /// Total over every remedy and free of I/O. Unrecognized input gets a
    /// generic "something is happening" placeholder.
    pub fn optimistic(remedy: &Remedy) -> Self {
        let (mood, animation, visual_effect) = match remedy.known() {
            Some(KnownRemedy::RubbingAlcohol) | Some(KnownRemedy::Mouthwash) => {
                (Mood::Agony, Animation::Shiver, VisualEffect::Sweat)
            }
            Some(KnownRemedy::Vinegar) => (Mood::Agony, Animation::Shiver, VisualEffect::AcidFumes),
            Some(KnownRemedy::HydrogenPeroxide) => {
                (Mood::Shock, Animation::Jolt, VisualEffect::Bubbles)
            }
            Some(KnownRemedy::Orajel) => (Mood::Numb, Animation::Sway, VisualEffect::None),
            Some(KnownRemedy::SaltWater) | Some(KnownRemedy::BakingSoda) => {
                (Mood::Relief, Animation::Float, VisualEffect::Sparkles)
            }
            Some(KnownRemedy::Toothpaste) => {
                (Mood::Neutral, Animation::Idle, VisualEffect::Sparkles)
            }
            Some(KnownRemedy::NoRemedy) => (Mood::Neutral, Animation::Throb, VisualEffect::None),
            None => (Mood::Shock, Animation::Shiver, VisualEffect::Sweat),
        };

        Self {
            // Placeholder until the reaction arrives
            pain_level: PainLevel::default(),
            mood,
            animation,
            visual_effect,
        }
    }

    /// Merge an arrived reaction into this (optimistic) state.
    ///
    /// Pain and mood always come from the reaction. Known remedies keep their
    /// animation and effect, which are definitional for them; custom remedies
    /// re-derive both from the reaction's mood.
    pub fn reconcile(&self, remedy: &Remedy, reaction: &ReactionResult) -> Self {
        let (animation, visual_effect) = if remedy.is_custom() {
            reaction.mood.inferred_motion()
        } else {
            (self.animation, self.visual_effect)
        };

        Self {
            pain_level: reaction.pain_level,
            mood: reaction.mood,
            animation,
            visual_effect,
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::initial()
    }
}
