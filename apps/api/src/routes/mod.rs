pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::state::AppState;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/catalog", get(catalog::handle_overview))
        .route("/api/v1/catalog/interests", get(catalog::handle_interests))
        .route("/api/v1/catalog/skills", get(catalog::handle_skills))
        .route("/api/v1/catalog/sdgs", get(catalog::handle_sdgs))
        .route("/api/v1/catalog/careers", get(catalog::handle_careers))
        .route("/api/v1/catalog/careers/:id", get(catalog::handle_career))
        // One-shot matching
        .route("/api/v1/match", post(matching::handle_match))
        // Questionnaire sessions
        .route("/api/v1/sessions", post(wizard::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(wizard::handle_get_session).delete(wizard::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/select", post(wizard::handle_select))
        .route("/api/v1/sessions/:id/next", post(wizard::handle_next))
        .route("/api/v1/sessions/:id/back", post(wizard::handle_back))
        .route("/api/v1/sessions/:id/restart", post(wizard::handle_restart))
        .route(
            "/api/v1/sessions/:id/careers/:career_id",
            post(wizard::handle_open_career),
        )
        .route(
            "/api/v1/sessions/:id/results",
            post(wizard::handle_close_career),
        )
        .with_state(state)
}
