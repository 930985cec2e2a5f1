//! Selection controller: drives one deep-dive request per selected bullet.
//!
//! State machine: `Idle → Loading → {Success, Error}`; the next selection
//! starts over. A superseded request is not cancelled. Its reply is dropped
//! when it lands, so the latest selection always owns the displayed state.

use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

use crate::deep_dive::models::RequestState;
use crate::errors::ActionFailure;
use crate::session::Session;

/// Selects `bullet` and starts decoding it in the background.
///
/// Returns `None` without calling the gateway when `bullet` is already the
/// current selection.
pub async fn select_bullet(session: &Arc<Session>, bullet: String) -> Option<JoinHandle<()>> {
    let request_id = {
        let mut state = session.state.write().await;
        if state.selected_bullet.as_deref() == Some(bullet.as_str()) {
            return None;
        }
        let request_id = Uuid::new_v4();
        if state.deep_dive.is_loading() {
            info!(%request_id, "Superseding a deep dive that is still loading");
        }
        state.selected_bullet = Some(bullet.clone());
        state.deep_dive = RequestState::Loading {
            request_id,
            bullet: bullet.clone(),
        };
        request_id
    };

    info!(%request_id, "Decoding bullet: {bullet}");
    let session = Arc::clone(session);
    Some(tokio::spawn(async move {
        decode(session, request_id, bullet).await;
    }))
}

async fn decode(session: Arc<Session>, request_id: Uuid, bullet: String) {
    let outcome = session.gateway.decode_bullet(&bullet).await;

    let mut state = session.state.write().await;
    if state.deep_dive.pending_request() != Some(request_id) {
        info!(%request_id, "Dropping superseded deep dive");
        return;
    }

    state.deep_dive = match outcome {
        Ok(result) => RequestState::Success {
            result,
            completed_at: Utc::now(),
        },
        Err(e) => {
            error!(%request_id, "Deep dive failed: {e}");
            RequestState::Error {
                message: ActionFailure::BulletDecode.to_string(),
            }
        }
    };
}
