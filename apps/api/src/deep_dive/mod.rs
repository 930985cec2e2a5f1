// Deep Dive: bullet selection, the request lifecycle, and the tabbed result view.
// All model calls go through llm_client::gateway; no direct HTTP calls here.

pub mod controller;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod render;
