//! Reaction resolution: canned, model-generated, or fallback.

use std::sync::Arc;

use toothtutor_domain::{Condition, ReactionResult, Remedy};

use super::decode::decode_reaction;
use super::prompt::{build_reaction_prompt, reaction_schema};
use crate::infrastructure::config::DEFAULT_TEMPERATURE;
use crate::infrastructure::ports::{LlmPort, LlmRequest};

/// Resolves a (remedy, condition) pair into a reaction.
///
/// Resolution never fails. The "no remedy" sentinel answers from the canned
/// table without touching the network; any backend or decode failure is
/// logged and replaced by [`ReactionResult::fallback`].
pub struct ReactionResolver {
    llm: Arc<dyn LlmPort>,
    temperature: f32,
}

impl ReactionResolver {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self {
            llm,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    pub async fn resolve(&self, remedy: &Remedy, condition: Condition) -> ReactionResult {
        if remedy.is_none_sentinel() {
            return ReactionResult::untreated(condition);
        }

        let request = LlmRequest::new(build_reaction_prompt(remedy, condition))
            .with_temperature(self.temperature)
            .with_response_schema(reaction_schema());

        tracing::debug!(
            remedy = %remedy,
            condition = %condition.display_name(),
            custom = remedy.is_custom(),
            "Requesting tooth reaction"
        );

        let response = match self.llm.generate(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    remedy = %remedy,
                    "Reaction request failed, using fallback"
                );
                return ReactionResult::fallback(remedy);
            }
        };

        match decode_reaction(&response.content) {
            Ok(reaction) => {
                tracing::info!(
                    remedy = %remedy,
                    condition = %condition.display_name(),
                    pain_level = reaction.pain_level.value(),
                    mood = reaction.mood.as_str(),
                    verdict = reaction.verdict.as_str(),
                    "Tooth reaction resolved"
                );
                reaction
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    response = %response.content,
                    remedy = %remedy,
                    "Could not decode reaction, using fallback"
                );
                ReactionResult::fallback(remedy)
            }
        }
    }
}
