//! Request bodies sent by a rendering client to the engine

use serde::{Deserialize, Serialize};

use toothtutor_domain::Condition;

/// Switch the simulated condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectConditionRequest {
    pub condition: Condition,
}

/// Apply a remedy by its identity string.
///
/// Known names select the known remedy; anything else is treated as custom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectRemedyRequest {
    pub remedy: String,
}

/// Apply a free-text remedy typed into the search box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRemedyRequest {
    pub text: String,
}

/// Query for the remedy picker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemedySearchQuery {
    #[serde(default)]
    pub query: String,
}
