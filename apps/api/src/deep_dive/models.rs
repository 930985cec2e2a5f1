use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// STAR breakdown of one achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarBreakdown {
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
}

/// A KPI the candidate can cite, e.g. `{"value": "45%", "label": "Latency reduction"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

/// Full model output for one bullet. Received wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepDiveResult {
    pub bullet: String,
    pub star: StarBreakdown,
    pub metrics: Vec<Metric>,
    pub questions: Vec<String>,
    pub narrative: String,
}

/// Lifecycle of the deep-dive request for the current selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestState {
    #[default]
    Idle,
    Loading {
        request_id: Uuid,
        bullet: String,
    },
    Success {
        result: DeepDiveResult,
        completed_at: DateTime<Utc>,
    },
    Error {
        message: String,
    },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }

    /// The id of the request this state is waiting on, if any.
    pub fn pending_request(&self) -> Option<Uuid> {
        match self {
            RequestState::Loading { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }
}
