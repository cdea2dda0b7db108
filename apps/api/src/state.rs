use std::sync::Arc;

use crate::config::Config;
use crate::intake::orchestrator::Orchestrator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no conversation state; clients carry their own `History`.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub config: Config,
}
