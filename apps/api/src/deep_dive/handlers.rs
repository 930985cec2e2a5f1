//! Axum route handlers for the Deep Dive API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::deep_dive::controller::select_bullet;
use crate::deep_dive::models::RequestState;
use crate::deep_dive::render::{DeepDivePanel, Tab};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectBulletRequest {
    pub bullet: String,
}

#[derive(Debug, Serialize)]
pub struct SelectBulletResponse {
    pub selected_bullet: Option<String>,
    pub state: RequestState,
}

#[derive(Debug, Default, Deserialize)]
pub struct PanelQuery {
    #[serde(default)]
    pub tab: Tab,
}

/// POST /api/v1/deep-dive/select
///
/// Starts decoding the bullet and returns 202 with the `loading` state.
/// Re-selecting the current bullet is a no-op and returns 200 with the
/// unchanged state.
pub async fn handle_select_bullet(
    State(state): State<AppState>,
    Json(request): Json<SelectBulletRequest>,
) -> Result<(StatusCode, Json<SelectBulletResponse>), AppError> {
    if request.bullet.trim().is_empty() {
        return Err(AppError::Validation("bullet cannot be empty".to_string()));
    }

    let status = match select_bullet(&state.session, request.bullet).await {
        Some(_) => StatusCode::ACCEPTED,
        None => StatusCode::OK,
    };

    let snapshot = state.session.snapshot().await;
    Ok((
        status,
        Json(SelectBulletResponse {
            selected_bullet: snapshot.selected_bullet,
            state: snapshot.deep_dive,
        }),
    ))
}

/// GET /api/v1/deep-dive?tab=star|metrics|narrative
pub async fn handle_get_deep_dive(
    State(state): State<AppState>,
    Query(query): Query<PanelQuery>,
) -> Json<DeepDivePanel> {
    let snapshot = state.session.snapshot().await;
    Json(DeepDivePanel::render(&snapshot.deep_dive, query.tab))
}
