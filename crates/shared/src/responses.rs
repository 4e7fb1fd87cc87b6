//! Response types returned by the engine
//!
//! A [`SessionSnapshot`] is everything a renderer needs: the visual state, the
//! latest reaction (or nothing), and the loading flag, plus a few derived hints
//! so that clients do not have to re-implement the lookup tables.

use serde::{Deserialize, Serialize};

use toothtutor_domain::{
    CharacterLook, Condition, PainBand, ReactionResult, VerdictTone, VisualState,
};

/// Full state of the session as seen by a renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub condition: ConditionInfo,
    pub selected_remedy: String,
    pub visual_state: VisualState,
    /// Absent until the first reaction arrives
    pub reaction: Option<ReactionPanel>,
    pub loading: bool,
    pub dropdown_open: bool,
    pub character: CharacterLook,
}

/// Condition plus its display strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionInfo {
    pub value: Condition,
    pub display_name: String,
    pub exposed_tissue: String,
    pub tip_title: String,
    pub tip_body: String,
}

/// Reaction along with derived pain-meter and verdict-badge hints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionPanel {
    #[serde(flatten)]
    pub result: ReactionResult,
    pub pain_band: PainBand,
    pub pain_description: String,
    pub pain_meter_percent: u8,
    pub verdict_tone: VerdictTone,
}

/// One entry of the remedy picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemedyOption {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_panel_flattens_result() {
        let result = ReactionResult::untreated(Condition::Cavity);
        let panel = ReactionPanel {
            pain_band: result.pain_level.band(),
            pain_description: result.pain_level.description().to_string(),
            pain_meter_percent: result.pain_level.meter_percent(),
            verdict_tone: result.verdict.tone(),
            result,
        };

        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["painLevel"], 3);
        assert_eq!(json["verdict"], "Use with Caution");
        assert_eq!(json["painBand"], "mild");
        assert_eq!(json["verdictTone"], "caution");

        let back: ReactionPanel = serde_json::from_value(json).unwrap();
        assert_eq!(back.result, panel.result);
    }
}
