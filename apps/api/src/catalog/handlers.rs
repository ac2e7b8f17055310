//! Axum route handlers for the read-only Catalog API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::models::{CareerRecord, CareerSummary, Sdg, TaxonomyCategory};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogOverview {
    pub version: String,
    pub career_count: usize,
    pub interest_count: usize,
    pub skill_count: usize,
    pub sdg_count: usize,
}

/// GET /api/v1/catalog
pub async fn handle_overview(State(state): State<AppState>) -> Json<CatalogOverview> {
    let catalog = &state.catalog;
    Json(CatalogOverview {
        version: catalog.version.clone(),
        career_count: catalog.careers.len(),
        interest_count: catalog
            .interest_categories
            .iter()
            .map(|c| c.items.len())
            .sum(),
        skill_count: catalog.skill_categories.iter().map(|c| c.items.len()).sum(),
        sdg_count: catalog.sdgs.len(),
    })
}

/// GET /api/v1/catalog/interests
pub async fn handle_interests(State(state): State<AppState>) -> Json<Vec<TaxonomyCategory>> {
    Json(state.catalog.interest_categories.clone())
}

/// GET /api/v1/catalog/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<Vec<TaxonomyCategory>> {
    Json(state.catalog.skill_categories.clone())
}

/// GET /api/v1/catalog/sdgs
pub async fn handle_sdgs(State(state): State<AppState>) -> Json<Vec<Sdg>> {
    Json(state.catalog.sdgs.clone())
}

/// GET /api/v1/catalog/careers
pub async fn handle_careers(State(state): State<AppState>) -> Json<Vec<CareerSummary>> {
    Json(state.catalog.careers.iter().map(CareerSummary::from).collect())
}

/// GET /api/v1/catalog/careers/:id
pub async fn handle_career(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Arc<CareerRecord>>, AppError> {
    state
        .catalog
        .career(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}
