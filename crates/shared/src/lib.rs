//! Tooth Tutor Protocol - Shared types for the engine and any rendering client
//!
//! Wire-format DTOs only:
//! - Request bodies for the user-facing triggers
//! - The session snapshot returned after every trigger
//!
//! No business logic lives here; conversions from domain state happen in the engine.

pub mod requests;
pub mod responses;

pub use requests::{
    CustomRemedyRequest, RemedySearchQuery, SelectConditionRequest, SelectRemedyRequest,
};
pub use responses::{ConditionInfo, ReactionPanel, RemedyOption, SessionSnapshot};
