//! Prompt and response schema for reaction requests.

use serde_json::json;

use toothtutor_domain::{Condition, Mood, Remedy, Verdict};

use crate::infrastructure::ports::ResponseSchema;

/// Reference facts about the known remedies, embedded in every prompt.
const KNOWN_INTERACTIONS: &[&str] = &[
    "Hydrogen Peroxide creates bubbles.",
    "Rubbing Alcohol causes extreme dehydration and burning.",
    "Vinegar is acidic.",
    "Orajel numbs.",
    "Salt water is soothing.",
];

/// Build the natural-language prompt for one (remedy, condition) pair.
pub fn build_reaction_prompt(remedy: &Remedy, condition: Condition) -> String {
    let remedy = remedy.as_str();
    let references = KNOWN_INTERACTIONS
        .iter()
        .map(|fact| format!("- {}", fact))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"I have a character that is a "{framing}".
A user just applied the substance "{remedy}" directly to the affected area.

Explain the reaction specifically for a {condition} tooth.

Key Context:
- A Broken Tooth has raw nerve exposure. Reactions are immediate, violent, and often more painful.
- A Cavity has decayed tissue covering the nerve but is porous. Reactions might be slower, duller, or trapped inside the hole.
- If the substance ("{remedy}") is a known remedy (like Hydrogen Peroxide, Clove Oil, etc.), treat it medically/chemically.
- If the substance is a custom input (e.g. "Lemon Juice", "Hot Sauce", "Ice Cream", "A Rock"), analyze its physical and chemical properties (pH, temperature, texture) and how they would interact with raw nerves or dentin.

Standard interactions reference (for known items):
{references}

Provide the output in JSON format specifically for an educational app."#,
        framing = condition.prompt_framing(),
        remedy = remedy,
        condition = condition.display_name(),
        references = references,
    )
}

/// Schema every reaction answer must follow. All five fields are required.
pub fn reaction_schema() -> ResponseSchema {
    let verdicts: Vec<&str> = Verdict::all().iter().map(Verdict::as_str).collect();
    let moods: Vec<&str> = Mood::all().iter().map(Mood::as_str).collect();

    ResponseSchema::new(
        "tooth_reaction",
        json!({
            "type": "object",
            "properties": {
                "painLevel": {
                    "type": "integer",
                    "description": "Estimated pain level on a scale of 0-10 immediately after application."
                },
                "sensationDescription": {
                    "type": "string",
                    "description": "A vivid description of what the tooth 'feels' (e.g., burning, soothing cooling, stinging)."
                },
                "scientificEffect": {
                    "type": "string",
                    "description": "A concise scientific explanation of the chemical interaction with the exposed nerve or decayed tissue."
                },
                "verdict": {
                    "type": "string",
                    "enum": verdicts,
                    "description": "The safety verdict for using this substance on the specific tooth condition."
                },
                "mood": {
                    "type": "string",
                    "enum": moods,
                    "description": "The emotional state of the tooth character."
                }
            },
            "required": ["painLevel", "sensationDescription", "scientificEffect", "verdict", "mood"]
        }),
    )
}
