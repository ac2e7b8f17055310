//! Axum route handler for one-shot, session-less matching.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::matching::matcher::{match_careers, MatchResult};
use crate::matching::profile::{UserProfile, MAX_SELECTIONS};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub catalog_version: String,
    pub matches: Vec<MatchResult>,
}

/// POST /api/v1/match
///
/// Scores a complete profile in one call. Rejects fields with duplicates or more
/// than `MAX_SELECTIONS` entries, and values the catalog does not know.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<MatchResponse>, AppError> {
    check_well_formed(&profile)?;
    check_known_values(&profile, &state.catalog)?;

    let matches = match_careers(&profile, &state.catalog);
    tracing::debug!("Stateless match produced {} results", matches.len());

    Ok(Json(MatchResponse {
        catalog_version: state.catalog.version.clone(),
        matches,
    }))
}

fn check_well_formed(profile: &UserProfile) -> Result<(), AppError> {
    check_field("selected_interests", &profile.selected_interests)?;
    check_field("current_skills", &profile.current_skills)?;
    check_field("desired_skills", &profile.desired_skills)?;
    check_field("selected_sdgs", &profile.selected_sdgs)
}

fn check_field<T: PartialEq + std::fmt::Debug>(name: &str, values: &[T]) -> Result<(), AppError> {
    if values.len() > MAX_SELECTIONS {
        return Err(AppError::Validation(format!(
            "{name} accepts at most {MAX_SELECTIONS} entries (got {})",
            values.len()
        )));
    }
    if let Some((i, v)) = values
        .iter()
        .enumerate()
        .find(|&(i, v)| values[..i].contains(v))
    {
        return Err(AppError::Validation(format!(
            "{name} lists {v:?} more than once (position {})",
            i + 1
        )));
    }
    Ok(())
}

fn check_known_values(profile: &UserProfile, catalog: &Catalog) -> Result<(), AppError> {
    if let Some(i) = profile
        .selected_interests
        .iter()
        .find(|i| !catalog.is_known_interest(i))
    {
        return Err(AppError::Validation(format!("Unknown interest: {i}")));
    }
    if let Some(s) = profile
        .current_skills
        .iter()
        .chain(&profile.desired_skills)
        .find(|s| !catalog.is_known_skill(s))
    {
        return Err(AppError::Validation(format!("Unknown skill: {s}")));
    }
    if let Some(id) = profile
        .selected_sdgs
        .iter()
        .find(|&&id| !catalog.is_known_sdg(id))
    {
        return Err(AppError::Validation(format!("Unknown SDG: {id}")));
    }
    Ok(())
}
