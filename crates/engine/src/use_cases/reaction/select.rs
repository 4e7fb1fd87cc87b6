//! Selection flow: optimistic update, resolution, reconciliation.
//!
//! Every trigger is split in two. `begin_*` runs one transition under the
//! session lock and returns a ticket; [`SelectRemedy::complete`] resolves the
//! ticket with the lock released and applies the result through the session's
//! token check.

use std::sync::Arc;

use tokio::task::JoinHandle;

use toothtutor_domain::{
    Condition, ConditionChange, DomainError, ReactionOutcome, Remedy, SelectionTicket,
};

use super::resolve::ReactionResolver;
use crate::stores::SessionStore;

pub struct SelectRemedy {
    store: Arc<SessionStore>,
    resolver: Arc<ReactionResolver>,
}

impl SelectRemedy {
    pub fn new(store: Arc<SessionStore>, resolver: Arc<ReactionResolver>) -> Self {
        Self { store, resolver }
    }

    /// Pick a remedy by name. Known names map to known remedies, anything else
    /// becomes a custom remedy.
    pub async fn begin_remedy(&self, input: &str) -> Result<SelectionTicket, DomainError> {
        let remedy = Remedy::parse(input)?;
        Ok(self
            .store
            .update(|session| {
                session.close_dropdown();
                session.begin_selection(remedy)
            })
            .await)
    }

    /// Submit free text typed by the user. Blank text is rejected.
    pub async fn begin_custom(&self, text: &str) -> Result<SelectionTicket, DomainError> {
        self.store.update(|session| session.submit_custom(text)).await
    }

    pub async fn begin_reset(&self) -> SelectionTicket {
        self.store.update(|session| session.reset()).await
    }

    pub async fn begin_condition(&self, condition: Condition) -> ConditionChange {
        self.store
            .update(|session| session.select_condition(condition))
            .await
    }

    /// Resolve a ticket and apply the result if it is still the latest.
    pub async fn complete(&self, ticket: SelectionTicket) -> ReactionOutcome {
        let reaction = self
            .resolver
            .resolve(&ticket.remedy, ticket.condition)
            .await;

        let outcome = self
            .store
            .update(|session| session.apply_reaction(&ticket, reaction))
            .await;

        match outcome {
            ReactionOutcome::Applied => {
                tracing::debug!(
                    token = ticket.token.value(),
                    remedy = %ticket.remedy,
                    "Reaction applied"
                );
            }
            ReactionOutcome::Stale { latest } => {
                tracing::debug!(
                    token = ticket.token.value(),
                    latest = latest.value(),
                    remedy = %ticket.remedy,
                    "Discarding stale reaction"
                );
            }
        }

        outcome
    }

    /// Run [`SelectRemedy::complete`] as a background task.
    pub fn spawn_completion(
        self: &Arc<Self>,
        ticket: SelectionTicket,
    ) -> JoinHandle<ReactionOutcome> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.complete(ticket).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse, MockLlmPort};
    use toothtutor_domain::{Animation, Mood, VisualEffect};

    fn payload(pain: u8, mood: &str) -> String {
        format!(
            r#"{{"painLevel": {}, "sensationDescription": "It tingles.", "scientificEffect": "Chemistry.", "verdict": "Use with Caution", "mood": "{}"}}"#,
            pain, mood
        )
    }

    fn ok(content: String) -> Result<LlmResponse, LlmError> {
        Ok(LlmResponse::new(content))
    }

    fn use_case(llm: impl LlmPort + 'static) -> (Arc<SessionStore>, Arc<SelectRemedy>) {
        let store = Arc::new(SessionStore::default());
        let resolver = Arc::new(ReactionResolver::new(Arc::new(llm)));
        let select = Arc::new(SelectRemedy::new(store.clone(), resolver));
        (store, select)
    }

    /// LLM double that holds back the answer for "Hot Sauce" until released,
    /// so a later selection can overtake it. Matches the remedy line only; the
    /// prompt's example list mentions the same substance.
    struct GatedLlm {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl LlmPort for GatedLlm {
        async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
            if request.prompt.contains("applied the substance \"Hot Sauce\"") {
                self.gate.notified().await;
                ok(payload(10, "agony"))
            } else {
                ok(payload(1, "numb"))
            }
        }
    }

    #[tokio::test]
    async fn test_known_remedy_applies_reconciled_state() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(|_| ok(payload(8, "shock")));
        let (store, select) = use_case(llm);

        let ticket = select.begin_remedy("Hydrogen Peroxide").await.unwrap();
        let outcome = select.complete(ticket).await;
        assert!(outcome.is_applied());

        let session = store.snapshot().await;
        assert!(!session.is_loading());
        assert_eq!(session.visual_state().pain_level.value(), 8);
        assert_eq!(session.visual_state().mood, Mood::Shock);
        // Known remedy keeps its optimistic motion
        assert_eq!(session.visual_state().animation, Animation::Jolt);
        assert_eq!(session.visual_state().visual_effect, VisualEffect::Bubbles);
    }

    #[tokio::test]
    async fn test_custom_remedy_motion_follows_mood() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(|_| ok(payload(0, "relief")));
        let (store, select) = use_case(llm);

        let ticket = select.begin_custom("Ice Cream").await.unwrap();
        let optimistic = store.snapshot().await;
        assert_eq!(optimistic.visual_state().animation, Animation::Shiver);
        assert!(optimistic.is_loading());

        select.complete(ticket).await;
        let session = store.snapshot().await;
        assert_eq!(session.visual_state().animation, Animation::Float);
        assert_eq!(session.visual_state().visual_effect, VisualEffect::Sparkles);
    }

    #[tokio::test]
    async fn test_blank_custom_text_is_rejected() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().times(0);
        let (store, select) = use_case(llm);

        assert!(select.begin_custom("  ").await.is_err());
        assert_eq!(store.snapshot().await.latest_token().value(), 0);
    }

    #[tokio::test]
    async fn test_reset_and_condition_use_canned_reactions() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().times(0);
        let (store, select) = use_case(llm);

        let ticket = select.begin_reset().await;
        select.complete(ticket).await;
        assert_eq!(store.snapshot().await.visual_state().pain_level.value(), 5);

        let ConditionChange::Changed(ticket) = select.begin_condition(Condition::Cavity).await
        else {
            panic!("expected a condition change");
        };
        select.complete(ticket).await;
        let session = store.snapshot().await;
        assert_eq!(session.condition(), Condition::Cavity);
        assert_eq!(session.visual_state().pain_level.value(), 3);

        assert_eq!(
            select.begin_condition(Condition::Cavity).await,
            ConditionChange::Unchanged
        );
    }

    #[tokio::test]
    async fn test_slow_earlier_reaction_does_not_overwrite_newer_one() {
        let gate = Arc::new(Notify::new());
        let (store, select) = use_case(GatedLlm { gate: gate.clone() });

        let slow_ticket = select.begin_remedy("Hot Sauce").await.unwrap();
        let slow = select.spawn_completion(slow_ticket);

        let fast_ticket = select.begin_remedy("Orajel (Benzocaine)").await.unwrap();
        let fast_outcome =
            tokio::time::timeout(Duration::from_secs(5), select.complete(fast_ticket.clone()))
                .await
                .expect("newer selection must not wait on the held-back answer");
        assert!(fast_outcome.is_applied());

        gate.notify_one();
        let slow_outcome = tokio::time::timeout(Duration::from_secs(5), slow)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            slow_outcome,
            ReactionOutcome::Stale {
                latest: fast_ticket.token
            }
        );

        let session = store.snapshot().await;
        assert_eq!(session.selected_remedy().as_str(), "Orajel (Benzocaine)");
        assert_eq!(session.visual_state().mood, Mood::Numb);
        assert_eq!(session.visual_state().pain_level.value(), 1);
    }
}
