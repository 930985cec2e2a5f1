// Import: replaces the whole resume from an uploaded file or a URL.
// Both flows share one state machine: Idle → Parsing → {Success, Error}.
// All model calls go through llm_client::gateway.

pub mod file;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod url;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::deep_dive::models::RequestState;
use crate::errors::ActionFailure;
use crate::import::models::{ImportSource, ImportState};
use crate::resume::lines::count_bullets;
use crate::session::Session;

/// Enters `Parsing` for `source` and returns the id that owns the state.
async fn begin_import(session: &Session, source: ImportSource) -> Uuid {
    let import_id = Uuid::new_v4();
    let mut state = session.state.write().await;
    if state.import.is_parsing() {
        warn!(%import_id, "Superseding an import that is still parsing");
    }
    info!(%import_id, "Import started: {source:?}");
    state.import = ImportState::Parsing { import_id, source };
    import_id
}

/// Applies the outcome of import `import_id`.
///
/// On success the content is replaced and the selection and deep dive are
/// reset, since they described the old document. A failure leaves content
/// untouched. If a newer import started meanwhile this one is dropped and the
/// newer state is returned.
async fn finish_import(
    session: &Session,
    import_id: Uuid,
    outcome: Result<String, ActionFailure>,
) -> Result<ImportState, ActionFailure> {
    let mut state = session.state.write().await;
    let source = match &state.import {
        ImportState::Parsing { source, .. }
            if state.import.pending_import() == Some(import_id) =>
        {
            source.clone()
        }
        _ => {
            warn!(%import_id, "Dropping superseded import");
            return Ok(state.import.clone());
        }
    };

    match outcome {
        Ok(text) => {
            info!(%import_id, "Import succeeded ({} chars)", text.len());
            state.import = ImportState::Success {
                source,
                characters: text.chars().count(),
                bullet_count: count_bullets(&text),
                completed_at: Utc::now(),
            };
            state.content = text;
            state.selected_bullet = None;
            state.deep_dive = RequestState::Idle;
            Ok(state.import.clone())
        }
        Err(failure) => {
            state.import = ImportState::Error {
                source,
                message: failure.to_string(),
            };
            Err(failure)
        }
    }
}
