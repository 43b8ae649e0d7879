pub mod api;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod news;

use std::sync::Arc;
use generator::Generator;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<Generator>,
}
