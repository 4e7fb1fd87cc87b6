//! Conversions from domain state to wire snapshots.

use toothtutor_domain::{CharacterLook, Condition, KnownRemedy, ReactionResult, ToothSession};
use toothtutor_shared::{ConditionInfo, ReactionPanel, RemedyOption, SessionSnapshot};

pub fn session_snapshot(session: &ToothSession) -> SessionSnapshot {
    let visual_state = *session.visual_state();

    SessionSnapshot {
        condition: condition_info(session.condition()),
        selected_remedy: session.selected_remedy().to_string(),
        visual_state,
        reaction: session.reaction().cloned().map(reaction_panel),
        loading: session.is_loading(),
        dropdown_open: session.is_dropdown_open(),
        character: CharacterLook::for_mood(visual_state.mood),
    }
}

fn condition_info(condition: Condition) -> ConditionInfo {
    let tip = condition.tip();
    ConditionInfo {
        value: condition,
        display_name: condition.display_name().to_string(),
        exposed_tissue: condition.exposed_tissue().to_string(),
        tip_title: tip.title.to_string(),
        tip_body: tip.body.to_string(),
    }
}

fn reaction_panel(result: ReactionResult) -> ReactionPanel {
    ReactionPanel {
        pain_band: result.pain_level.band(),
        pain_description: result.pain_level.description().to_string(),
        pain_meter_percent: result.pain_level.meter_percent(),
        verdict_tone: result.verdict.tone(),
        result,
    }
}

pub fn remedy_options(remedies: Vec<KnownRemedy>) -> Vec<RemedyOption> {
    remedies
        .into_iter()
        .map(|remedy| RemedyOption {
            name: remedy.name().to_string(),
        })
        .collect()
}
