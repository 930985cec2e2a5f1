//! Axum route handlers for the Resume content API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::resume::lines::ResumeView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetContentRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub content: String,
    #[serde(flatten)]
    pub view: ResumeView,
}

async fn current_resume(state: &AppState) -> ResumeResponse {
    let snapshot = state.session.snapshot().await;
    let view = ResumeView::build(&snapshot.content, snapshot.selected_bullet.as_deref());
    ResumeResponse {
        content: snapshot.content,
        view,
    }
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeResponse> {
    Json(current_resume(&state).await)
}

/// PUT /api/v1/resume
///
/// Paste or manual edit. Replaces the whole text; selection is kept.
pub async fn handle_set_content(
    State(state): State<AppState>,
    Json(request): Json<SetContentRequest>,
) -> Json<ResumeResponse> {
    state.session.set_content(request.content).await;
    Json(current_resume(&state).await)
}

/// POST /api/v1/resume/example
pub async fn handle_load_example(State(state): State<AppState>) -> Json<ResumeResponse> {
    state.session.load_example().await;
    Json(current_resume(&state).await)
}
