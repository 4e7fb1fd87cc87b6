//! Aggregate roots - domain objects that own their related data
//!
//! Aggregates expose behavior through methods, not public fields, and report
//! what a mutation did by returning an outcome enum.

pub mod tooth_session;

pub use tooth_session::{
    ConditionChange, ReactionOutcome, SelectionTicket, SelectionToken, ToothSession,
};
