//! Axum route handlers for the questionnaire session API.
//!
//! Each handler locks one session, applies a wizard transition, and returns the
//! session view. Text generation (top-match rationale, career pathway) happens
//! here with the session lock held, and the result is cached on the session.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::models::CareerRecord;
use crate::errors::AppError;
use crate::matching::matcher::MatchResult;
use crate::matching::profile::{Selection, UserProfile};
use crate::state::AppState;
use crate::wizard::store::SharedSession;
use crate::wizard::{ResultsView, StepProgress, WizardSession, WizardStep};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TopMatchExplanation {
    pub career_id: u32,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CareerDetail {
    pub career: Arc<CareerRecord>,
    pub pathway: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub step: WizardStep,
    pub progress: Vec<StepProgress>,
    pub profile: UserProfile,
    pub matches: Vec<MatchResult>,
    pub top_match_explanation: Option<TopMatchExplanation>,
    pub detail: Option<CareerDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&WizardSession> for SessionView {
    fn from(session: &WizardSession) -> Self {
        let top_match_explanation = session.top_match().and_then(|top| {
            session
                .explanations
                .get(&top.career.id)
                .map(|text| TopMatchExplanation {
                    career_id: top.career.id,
                    text: text.clone(),
                })
        });

        let detail = match session.step {
            WizardStep::Results(ResultsView::Detail { career_id }) => session
                .matches
                .iter()
                .find(|m| m.career.id == career_id)
                .map(|m| CareerDetail {
                    career: Arc::clone(&m.career),
                    pathway: session.pathways.get(&career_id).cloned(),
                }),
            _ => None,
        };

        Self {
            id: session.id,
            step: session.step,
            progress: session.progress(),
            profile: session.profile.clone(),
            matches: session.matches.clone(),
            top_match_explanation,
            detail,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let id = state.sessions.create().await;
    info!(
        "Created questionnaire session {id} ({} active)",
        state.sessions.len().await
    );
    let session = load(&state, id).await?;
    let view = SessionView::from(&*session.lock().await);
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = load(&state, id).await?;
    let view = SessionView::from(&*session.lock().await);
    Ok(Json(view))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id).await {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    info!("Deleted questionnaire session {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/select
///
/// Toggles one option, e.g. `{"kind": "interest", "value": "Biology"}`.
pub async fn handle_select(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(selection): Json<Selection>,
) -> Result<Json<SessionView>, AppError> {
    let session = load(&state, id).await?;
    let mut session = session.lock().await;
    session.select(selection, &state.catalog)?;
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/next
///
/// Advances one step. Reaching Results runs the matcher and explains the top match.
pub async fn handle_next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = load(&state, id).await?;
    let mut session = session.lock().await;

    let step = session.advance(&state.catalog)?;
    debug!("Session {id} advanced to {}", step.label());

    if let WizardStep::Results(_) = step {
        info!(
            "Session {id} matched {} careers (catalog {})",
            session.matches.len(),
            state.catalog.version
        );
        explain_top_match(&state, &mut session).await;
    }

    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/back
pub async fn handle_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = load(&state, id).await?;
    let mut session = session.lock().await;
    session.back()?;
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/restart
pub async fn handle_restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = load(&state, id).await?;
    let mut session = session.lock().await;
    session.restart();
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/careers/:career_id
///
/// Opens the detail view for one match, generating its educational pathway on first visit.
pub async fn handle_open_career(
    State(state): State<AppState>,
    Path((id, career_id)): Path<(Uuid, u32)>,
) -> Result<Json<SessionView>, AppError> {
    let session = load(&state, id).await?;
    let mut session = session.lock().await;

    let career = Arc::clone(&session.open_career(career_id)?.career);

    if session.pathways.contains_key(&career_id) {
        debug!("Pathway cache hit for career {career_id}");
    } else {
        let generated = state.explainer.pathway(&career).await;
        info!(
            "Generated pathway for career {career_id} via {}",
            generated.source
        );
        session.pathways.insert(career_id, generated.text);
    }

    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/results
pub async fn handle_close_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = load(&state, id).await?;
    let mut session = session.lock().await;
    session.close_career()?;
    Ok(Json(SessionView::from(&*session)))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn load(state: &AppState, id: Uuid) -> Result<SharedSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// Generates the rationale for the top match unless one is already cached.
async fn explain_top_match(state: &AppState, session: &mut WizardSession) {
    let Some(top) = session.top_match().cloned() else {
        return;
    };
    let career_id = top.career.id;

    if session.explanations.contains_key(&career_id) {
        debug!("Explanation cache hit for career {career_id}");
        return;
    }

    let generated = state
        .explainer
        .rationale(&top, &session.profile, &state.catalog)
        .await;
    info!(
        "Generated explanation for career {career_id} via {}",
        generated.source
    );
    session.explanations.insert(career_id, generated.text);
}
