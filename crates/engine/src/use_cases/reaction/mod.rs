//! Reaction use cases - how the tooth responds to a remedy.
//!
//! Resolution goes through the LLM port for real substances and through a
//! canned table for "no remedy". Selections run against the shared session
//! store and only the newest one may land.

mod decode;
mod picker;
mod prompt;
mod resolve;
mod select;

pub use decode::{decode_reaction, ReactionDecodeError};
pub use picker::RemedyPicker;
pub use prompt::{build_reaction_prompt, reaction_schema};
pub use resolve::ReactionResolver;
pub use select::SelectRemedy;

use std::sync::Arc;

/// Container for reaction use cases.
pub struct ReactionUseCases {
    pub select: Arc<SelectRemedy>,
    pub picker: Arc<RemedyPicker>,
}

impl ReactionUseCases {
    pub fn new(select: Arc<SelectRemedy>, picker: Arc<RemedyPicker>) -> Self {
        Self { select, picker }
    }
}
