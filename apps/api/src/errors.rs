use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures of a user action. `Display` is the fixed, user-facing message;
/// the underlying cause is logged where it happens and never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionFailure {
    #[error("Failed to generate deep dive.")]
    BulletDecode,

    #[error("Failed to read the file. Please try again.")]
    FileRead,

    #[error("Could not extract text from this file. Please try a PDF or plain text file.")]
    FileExtraction,

    #[error(
        "Could not import content from this URL. The page may be private or blocked; \
         please copy the text and paste it instead."
    )]
    UrlImport,

    #[error("An unexpected error occurred during upload. Please try again.")]
    UnexpectedUpload,
}

impl ActionFailure {
    pub fn code(&self) -> &'static str {
        match self {
            ActionFailure::BulletDecode => "BULLET_DECODE_FAILED",
            ActionFailure::FileRead => "FILE_READ_FAILED",
            ActionFailure::FileExtraction => "FILE_EXTRACTION_FAILED",
            ActionFailure::UrlImport => "URL_IMPORT_FAILED",
            ActionFailure::UnexpectedUpload => "UPLOAD_FAILED",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ActionFailure::BulletDecode
            | ActionFailure::FileExtraction
            | ActionFailure::UrlImport => StatusCode::BAD_GATEWAY,
            ActionFailure::FileRead => StatusCode::UNPROCESSABLE_ENTITY,
            ActionFailure::UnexpectedUpload => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("File too large: {0}")]
    FileTooLarge(String),

    #[error(transparent)]
    Action(#[from] ActionFailure),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFile(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FILE",
                msg.clone(),
            ),
            AppError::FileTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "FILE_TOO_LARGE", msg.clone())
            }
            AppError::Action(failure) => (failure.status(), failure.code(), failure.to_string()),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
