//! URL import: the model fetches and reformats the page.
//!
//! The model answers with prose when it cannot reach a page, so short
//! answers and refusals are treated as a failed import instead of content.

use tracing::{error, warn};

use crate::errors::{ActionFailure, AppError};
use crate::import::models::{ImportSource, ImportState};
use crate::import::{begin_import, finish_import};
use crate::session::Session;

/// Answers shorter than this (after trimming) are not a resume.
const MIN_IMPORTED_CHARS: usize = 50;
const REFUSAL_MARKERS: &[&str] = &["cannot access"];

/// Why a model answer is not usable as page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    TooShort,
    Refusal,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::TooShort => write!(f, "answer is too short to be a resume"),
            Rejection::Refusal => write!(f, "answer looks like a refusal"),
        }
    }
}

/// Returns why the model's answer is not real page content, if it is not.
fn check_answer(text: &str) -> Option<Rejection> {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_IMPORTED_CHARS {
        return Some(Rejection::TooShort);
    }
    let lowered = trimmed.to_lowercase();
    REFUSAL_MARKERS
        .iter()
        .any(|m| lowered.contains(m))
        .then_some(Rejection::Refusal)
}

/// Imports the page at `url` as the new resume content. The URL is
/// forwarded verbatim; only emptiness is checked.
pub async fn import_from_url(session: &Session, url: String) -> Result<ImportState, AppError> {
    if url.trim().is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    let import_id = begin_import(session, ImportSource::Url { url: url.clone() }).await;

    let outcome = match session.gateway.extract_text_from_url(&url).await {
        Ok(text) => match check_answer(&text) {
            None => Ok(text),
            Some(rejection) => {
                warn!(
                    "Discarding URL import of {url}: {rejection} ({} chars)",
                    text.trim().chars().count()
                );
                Err(ActionFailure::UrlImport)
            }
        },
        Err(e) => {
            error!("URL import of {url} failed: {e}");
            Err(ActionFailure::UrlImport)
        }
    };

    Ok(finish_import(session, import_id, outcome).await?)
}
