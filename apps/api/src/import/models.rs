use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Where an import's text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImportSource {
    File { file_name: String, mime_type: String },
    Url { url: String },
}

/// Lifecycle of the current whole-document import. Separate from the
/// deep-dive state: clients show `parsing` as a blocking overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImportState {
    #[default]
    Idle,
    Parsing {
        import_id: Uuid,
        source: ImportSource,
    },
    Success {
        source: ImportSource,
        characters: usize,
        bullet_count: usize,
        completed_at: DateTime<Utc>,
    },
    Error {
        source: ImportSource,
        message: String,
    },
}

impl ImportState {
    pub fn is_parsing(&self) -> bool {
        matches!(self, ImportState::Parsing { .. })
    }

    /// The id of the import this state is waiting on, if any.
    pub fn pending_import(&self) -> Option<Uuid> {
        match self {
            ImportState::Parsing { import_id, .. } => Some(*import_id),
            _ => None,
        }
    }
}
