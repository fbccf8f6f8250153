use std::sync::Arc;

use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::extraction::resume::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; reloading requires a restart.
    pub catalog: Arc<RoleCatalog>,
    /// Owns the compiled skill vocabulary.
    pub analyzer: Arc<ResumeAnalyzer>,
}
