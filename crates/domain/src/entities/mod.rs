//! Domain entities

mod reaction;
mod visual_state;

pub use reaction::ReactionResult;
pub use visual_state::VisualState;
