use std::sync::Arc;

use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one editing session this service hosts. Owns the AI gateway.
    pub session: Arc<Session>,
}
