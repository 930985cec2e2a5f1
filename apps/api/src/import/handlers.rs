//! Axum route handlers for the Import API.
//!
//! Imports are awaited in the request: the client shows a blocking overlay
//! while the session reports `parsing`.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::error;

use crate::errors::{ActionFailure, AppError};
use crate::import::file::{upload_file, UploadedFile, MAX_UPLOAD_BYTES};
use crate::import::models::ImportState;
use crate::import::url::import_from_url;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct UrlImportRequest {
    pub url: String,
}

/// POST /api/v1/import/file
///
/// Multipart form with a single `file` field.
pub async fn handle_upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportState>, AppError> {
    let file = read_file_field(&mut multipart).await?;
    let import = upload_file(&state.session, file).await?;
    Ok(Json(import))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    loop {
        let field = multipart.next_field().await.map_err(|e| {
            error!("Failed to read multipart upload: {e}");
            upload_error(e, ActionFailure::UnexpectedUpload)
        })?;
        let Some(field) = field else {
            return Err(AppError::Validation(format!(
                "multipart field '{FILE_FIELD}' is required"
            )));
        };
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read uploaded file '{file_name}': {e}");
            upload_error(e, ActionFailure::FileRead)
        })?;

        return Ok(UploadedFile {
            file_name,
            content_type,
            data,
        });
    }
}

/// Maps a multipart read error: an oversized body gets its own message since
/// retrying the same file cannot succeed.
fn upload_error(e: MultipartError, fallback: ActionFailure) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::FileTooLarge(format!(
            "The file is larger than the {} MB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        ))
    } else {
        fallback.into()
    }
}

/// POST /api/v1/import/url
pub async fn handle_import_url(
    State(state): State<AppState>,
    Json(request): Json<UrlImportRequest>,
) -> Result<Json<ImportState>, AppError> {
    let import = import_from_url(&state.session, request.url).await?;
    Ok(Json(import))
}

/// GET /api/v1/import
pub async fn handle_get_import(State(state): State<AppState>) -> Json<ImportState> {
    Json(state.session.snapshot().await.import)
}
