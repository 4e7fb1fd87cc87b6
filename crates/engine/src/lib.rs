//! Tooth Tutor Engine library.
//!
//! This crate contains all server-side code for the tooth tutor.
//!
//! ## Structure
//!
//! - `use_cases/` - Reaction resolution and selection flow
//! - `stores/` - In-memory session state
//! - `infrastructure/` - Configuration and LLM adapters (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
