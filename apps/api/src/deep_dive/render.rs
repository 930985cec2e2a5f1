//! Deep-dive presentation: what the right-hand panel shows for a given
//! request state and tab.

use serde::{Deserialize, Serialize};

use crate::deep_dive::models::{DeepDiveResult, Metric, RequestState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Star,
    Metrics,
    Narrative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarSection {
    pub key: &'static str,
    /// Badge letter, e.g. "S".
    pub initial: char,
    pub heading: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum TabView {
    Star {
        sections: Vec<StarSection>,
    },
    Metrics {
        metrics: Vec<Metric>,
        questions: Vec<String>,
    },
    Narrative {
        narrative: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum DeepDivePanel {
    /// Nothing selected yet.
    Placeholder,
    Loading { bullet: String },
    Error { message: String },
    Ready { bullet: String, view: TabView },
}

impl DeepDivePanel {
    pub fn render(state: &RequestState, tab: Tab) -> Self {
        match state {
            RequestState::Idle => DeepDivePanel::Placeholder,
            RequestState::Loading { bullet, .. } => DeepDivePanel::Loading {
                bullet: bullet.clone(),
            },
            RequestState::Error { message } => DeepDivePanel::Error {
                message: message.clone(),
            },
            RequestState::Success { result, .. } => DeepDivePanel::Ready {
                bullet: result.bullet.clone(),
                view: render_tab(result, tab),
            },
        }
    }
}

pub fn render_tab(result: &DeepDiveResult, tab: Tab) -> TabView {
    match tab {
        Tab::Star => {
            let star = &result.star;
            let sections = [
                ("situation", "Situation", &star.situation),
                ("task", "Task", &star.task),
                ("action", "Action", &star.action),
                ("result", "Result", &star.result),
            ]
            .into_iter()
            .map(|(key, heading, body)| StarSection {
                key,
                initial: heading.chars().next().unwrap_or_default(),
                heading,
                body: body.clone(),
            })
            .collect();
            TabView::Star { sections }
        }
        Tab::Metrics => TabView::Metrics {
            metrics: result.metrics.clone(),
            questions: result.questions.clone(),
        },
        Tab::Narrative => TabView::Narrative {
            narrative: result.narrative.clone(),
        },
    }
}
