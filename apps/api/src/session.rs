//! The single in-memory editing session: resume content, current selection,
//! and the two request state machines (deep dive, import).
//!
//! Nothing here is persisted; a restart brings back the sample resume.
//! The lock is never held across a gateway call.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::deep_dive::models::RequestState;
use crate::import::models::ImportState;
use crate::llm_client::gateway::AiGateway;
use crate::resume::sample::DEFAULT_RESUME;

#[derive(Debug, Clone)]
pub struct SessionState {
    pub content: String,
    pub selected_bullet: Option<String>,
    pub deep_dive: RequestState,
    pub import: ImportState,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            content: DEFAULT_RESUME.to_string(),
            selected_bullet: None,
            deep_dive: RequestState::Idle,
            import: ImportState::Idle,
        }
    }
}

pub struct Session {
    pub(crate) state: RwLock<SessionState>,
    pub(crate) gateway: Arc<dyn AiGateway>,
}

impl Session {
    pub fn new(gateway: Arc<dyn AiGateway>) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            gateway,
        }
    }

    /// A consistent copy of the whole session.
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Replaces the resume text wholesale. Selection and deep dive are kept.
    pub async fn set_content(&self, content: String) {
        let mut state = self.state.write().await;
        info!("Resume content replaced ({} chars)", content.len());
        state.content = content;
    }

    /// Restores the built-in sample resume.
    pub async fn load_example(&self) {
        self.set_content(DEFAULT_RESUME.to_string()).await;
    }
}
