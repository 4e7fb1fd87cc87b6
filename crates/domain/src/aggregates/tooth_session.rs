//! Tooth session aggregate - the single state container behind the UI
//!
//! Every user action maps to one transition. Selections are two-phase:
//! [`ToothSession::begin_selection`] applies the optimistic state and hands out
//! a [`SelectionTicket`]; the caller resolves the reaction without holding the
//! session, then feeds it back through [`ToothSession::apply_reaction`].
//!
//! Each ticket carries a monotonically increasing token. Only the latest
//! ticket may apply its reaction, so a slow response that finishes after a
//! newer selection is discarded instead of overwriting it.

use serde::{Deserialize, Serialize};

use crate::entities::{ReactionResult, VisualState};
use crate::error::DomainError;
use crate::types::{Condition, Remedy};

/// Monotonic token identifying one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SelectionToken(u64);

impl SelectionToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Everything needed to resolve one selection outside the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    pub token: SelectionToken,
    pub remedy: Remedy,
    pub condition: Condition,
}

/// Outcome of feeding a reaction back into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// The reaction belonged to the latest selection and is now displayed
    Applied,
    /// A newer selection was made meanwhile; the reaction was dropped
    Stale { latest: SelectionToken },
}

impl ReactionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Outcome of a condition toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionChange {
    /// Already on that condition; nothing happened
    Unchanged,
    /// Condition switched and the remedy was reset to the sentinel
    Changed(SelectionTicket),
}

/// The session: condition, remedy, what is displayed, and what is pending
#[derive(Debug, Clone)]
pub struct ToothSession {
    condition: Condition,
    selected_remedy: Remedy,
    visual_state: VisualState,
    reaction: Option<ReactionResult>,
    loading: bool,
    dropdown_open: bool,
    latest_token: SelectionToken,
}

impl ToothSession {
    pub fn new(condition: Condition) -> Self {
        Self {
            condition,
            selected_remedy: Remedy::none(),
            visual_state: VisualState::initial(),
            reaction: None,
            loading: false,
            dropdown_open: false,
            latest_token: SelectionToken(0),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn selected_remedy(&self) -> &Remedy {
        &self.selected_remedy
    }

    pub fn visual_state(&self) -> &VisualState {
        &self.visual_state
    }

    /// Latest applied reaction, if any has arrived yet
    pub fn reaction(&self) -> Option<&ReactionResult> {
        self.reaction.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn latest_token(&self) -> SelectionToken {
        self.latest_token
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Switch condition. Switching resets the remedy to the sentinel.
    pub fn select_condition(&mut self, condition: Condition) -> ConditionChange {
        if condition == self.condition {
            return ConditionChange::Unchanged;
        }
        self.condition = condition;
        ConditionChange::Changed(self.begin_selection(Remedy::none()))
    }

    /// Start a selection: show the optimistic state and issue a ticket.
    pub fn begin_selection(&mut self, remedy: Remedy) -> SelectionTicket {
        self.latest_token = SelectionToken(self.latest_token.0 + 1);
        self.visual_state = VisualState::optimistic(&remedy);
        self.selected_remedy = remedy.clone();
        self.loading = true;

        SelectionTicket {
            token: self.latest_token,
            remedy,
            condition: self.condition,
        }
    }

    /// Start a selection from free text typed by the user.
    ///
    /// Blank input is rejected without touching the session. Submitting closes
    /// the remedy dropdown.
    pub fn submit_custom(&mut self, text: &str) -> Result<SelectionTicket, DomainError> {
        let remedy = Remedy::parse(text)?;
        self.dropdown_open = false;
        Ok(self.begin_selection(remedy))
    }

    /// Reset to "no remedy" under the current condition.
    pub fn reset(&mut self) -> SelectionTicket {
        self.dropdown_open = false;
        self.begin_selection(Remedy::none())
    }

    /// Apply a resolved reaction if its ticket is still the latest.
    pub fn apply_reaction(
        &mut self,
        ticket: &SelectionTicket,
        reaction: ReactionResult,
    ) -> ReactionOutcome {
        if ticket.token != self.latest_token {
            return ReactionOutcome::Stale {
                latest: self.latest_token,
            };
        }

        self.visual_state = self.visual_state.reconcile(&ticket.remedy, &reaction);
        self.reaction = Some(reaction);
        self.loading = false;
        ReactionOutcome::Applied
    }

    /// Open or close the remedy dropdown. Ignored while a reaction is loading.
    pub fn toggle_dropdown(&mut self) -> bool {
        if !self.loading {
            self.dropdown_open = !self.dropdown_open;
        }
        self.dropdown_open
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }
}

impl Default for ToothSession {
    fn default() -> Self {
        Self::new(Condition::default())
    }
}
