//! Application state and composition.

use std::sync::Arc;

use toothtutor_domain::Condition;

use crate::infrastructure::ports::LlmPort;
use crate::stores::SessionStore;
use crate::use_cases;
use crate::use_cases::reaction::{ReactionResolver, RemedyPicker, SelectRemedy};

/// Main application state.
///
/// Holds the session store and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub session: Arc<SessionStore>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub reaction: use_cases::ReactionUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(llm: Arc<dyn LlmPort>, temperature: f32) -> Self {
        let session = Arc::new(SessionStore::new(Condition::default()));

        let resolver = Arc::new(ReactionResolver::new(llm).with_temperature(temperature));
        let select = Arc::new(SelectRemedy::new(session.clone(), resolver));
        let picker = Arc::new(RemedyPicker::new(session.clone()));

        let use_cases = UseCases {
            reaction: use_cases::ReactionUseCases::new(select, picker),
        };

        Self { session, use_cases }
    }
}
