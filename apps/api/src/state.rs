use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::explanation::Explainer;
use crate::wizard::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup.
    pub catalog: Arc<Catalog>,
    /// Text generation with local fallback. Backend picked once in `main`.
    pub explainer: Explainer,
    pub sessions: SessionStore,
    pub config: Config,
}
