//! Value objects - immutable, self-validating domain values

mod pain_level;

pub use pain_level::{PainBand, PainLevel};
