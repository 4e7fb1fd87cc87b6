//! Tooth Tutor Domain - vocabulary, reaction results, and the session state container.
//!
//! Pure logic only: no I/O, no async, no clocks. The engine drives these types.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod types;
pub mod value_objects;

pub use aggregates::{
    ConditionChange, ReactionOutcome, SelectionTicket, SelectionToken, ToothSession,
};
pub use entities::{ReactionResult, VisualState};
pub use error::DomainError;
pub use types::{
    Animation, BodyTint, CharacterLook, Condition, ConditionTip, EyeStyle, KnownRemedy, Mood,
    Remedy, Verdict, VerdictTone, VisualEffect,
};
pub use value_objects::{PainBand, PainLevel};
