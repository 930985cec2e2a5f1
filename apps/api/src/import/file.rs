//! File upload import.
//!
//! `.txt` / `.md` are decoded as UTF-8 and used verbatim. PDF, images and
//! DOCX are base64-encoded and transcribed by the model.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use tracing::{error, warn};

use crate::errors::{ActionFailure, AppError};
use crate::import::models::{ImportSource, ImportState};
use crate::import::{begin_import, finish_import};
use crate::session::Session;

/// Accepted extensions and the MIME type each maps to.
pub const ACCEPTED_TYPES: &[(&str, &str)] = &[
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
];

/// Largest accepted upload body: the model API's inline-data ceiling.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

const TEXT_MIME_TYPES: &[&str] = &["text/plain", "text/markdown"];

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    /// MIME type reported by the client, if any.
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FileKind {
    Text,
    Binary,
}

/// Resolves the MIME type from the extension, falling back to the client's
/// content type when the name has no recognised extension.
fn resolve_mime_type(file: &UploadedFile) -> Option<&'static str> {
    let extension = Path::new(&file.file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    if let Some(ext) = extension {
        if let Some((_, mime)) = ACCEPTED_TYPES.iter().find(|(e, _)| *e == ext) {
            return Some(*mime);
        }
    }

    let content_type = file.content_type.as_deref()?;
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    ACCEPTED_TYPES
        .iter()
        .find(|(_, mime)| mime.eq_ignore_ascii_case(essence))
        .map(|(_, mime)| *mime)
}

fn kind_of(mime_type: &str) -> FileKind {
    if TEXT_MIME_TYPES.contains(&mime_type) {
        FileKind::Text
    } else {
        FileKind::Binary
    }
}

/// Imports `file` as the new resume content.
///
/// Unsupported types are rejected before any state change. Otherwise the
/// session goes through `Parsing` and ends in `Success` or `Error`.
pub async fn upload_file(session: &Session, file: UploadedFile) -> Result<ImportState, AppError> {
    let mime_type = resolve_mime_type(&file).ok_or_else(|| {
        AppError::UnsupportedFile(format!(
            "'{}' is not supported. Upload a .txt, .md, .pdf, .png, .jpg, .jpeg or .docx file",
            file.file_name
        ))
    })?;

    let source = ImportSource::File {
        file_name: file.file_name.clone(),
        mime_type: mime_type.to_string(),
    };
    let import_id = begin_import(session, source).await;

    let outcome = match kind_of(mime_type) {
        FileKind::Text => read_text(&file),
        FileKind::Binary => extract_binary(session, &file, mime_type).await,
    };

    Ok(finish_import(session, import_id, outcome).await?)
}

fn read_text(file: &UploadedFile) -> Result<String, ActionFailure> {
    String::from_utf8(file.data.to_vec()).map_err(|e| {
        error!("Failed to read '{}' as UTF-8: {e}", file.file_name);
        ActionFailure::FileRead
    })
}

async fn extract_binary(
    session: &Session,
    file: &UploadedFile,
    mime_type: &str,
) -> Result<String, ActionFailure> {
    let encoded = STANDARD.encode(&file.data);
    match session
        .gateway
        .extract_text_from_file(&encoded, mime_type)
        .await
    {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) => {
            warn!("Model returned no text for '{}'", file.file_name);
            Err(ActionFailure::FileExtraction)
        }
        Err(e) => {
            error!("File extraction failed for '{}': {e}", file.file_name);
            Err(ActionFailure::FileExtraction)
        }
    }
}
