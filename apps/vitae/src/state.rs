use std::sync::Arc;

use crate::catalog::TemplateCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Read-only for the lifetime of the process.
    pub catalog: Arc<TemplateCatalog>,
}
