// All prompt constants for the Deep Dive module.

use serde_json::{json, Value};

/// Deep-dive prompt template. Replace `{bullet}` before sending.
pub const DEEP_DIVE_PROMPT_TEMPLATE: &str = r#"Analyze the following resume bullet point and expand it into a detailed interview preparation guide.

Bullet Point: "{bullet}"

Provide:
1. A STAR method expansion (Situation, Task, Action, Result).
2. 2-3 potential KPIs/Metrics related to this work.
3. 3 specific follow-up questions an interviewer might ask.
4. A first-person storytelling narrative that provides "behind the scenes" context.

Echo the bullet point verbatim in the "bullet" field."#;

pub fn build_deep_dive_prompt(bullet: &str) -> String {
    DEEP_DIVE_PROMPT_TEMPLATE.replace("{bullet}", bullet)
}

/// Response schema sent with the deep-dive request. Mirrors `DeepDiveResult`;
/// every field is required so the model cannot omit a section.
pub fn deep_dive_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "bullet": { "type": "STRING" },
            "star": {
                "type": "OBJECT",
                "properties": {
                    "situation": { "type": "STRING" },
                    "task": { "type": "STRING" },
                    "action": { "type": "STRING" },
                    "result": { "type": "STRING" }
                },
                "required": ["situation", "task", "action", "result"]
            },
            "metrics": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "value": { "type": "STRING" },
                        "label": { "type": "STRING" }
                    },
                    "required": ["value", "label"]
                }
            },
            "questions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "narrative": { "type": "STRING" }
        },
        "required": ["bullet", "star", "metrics", "questions", "narrative"]
    })
}
