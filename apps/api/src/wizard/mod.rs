//! Wizard: the four-step questionnaire as an explicit state machine.
//!
//! Interests → Skills → Values → Results(List | Detail).
//! Transition guards are cardinality checks on the profile; entering Results
//! runs the matcher. Text generation stays out of here (see `handlers`).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::Instant;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::matching::matcher::{match_careers, MatchResult};
use crate::matching::profile::{Selection, UserProfile, MAX_SELECTIONS};

pub mod handlers;
pub mod store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ResultsView {
    List,
    Detail { career_id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", content = "results", rename_all = "snake_case")]
pub enum WizardStep {
    Interests,
    Skills,
    Values,
    Results(ResultsView),
}

impl WizardStep {
    /// 1-based position used by the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Interests => 1,
            WizardStep::Skills => 2,
            WizardStep::Values => 3,
            WizardStep::Results(_) => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Interests => "interests",
            WizardStep::Skills => "skills",
            WizardStep::Values => "values",
            WizardStep::Results(_) => "results",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Active,
    Complete,
    Inactive,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepProgress {
    pub number: u8,
    pub label: &'static str,
    pub status: StepStatus,
}

const STEP_LABELS: [&str; 4] = ["Interests", "Skills", "Values", "Results"];

#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("{kind} selections cannot change during the {step} step")]
    WrongStep {
        kind: &'static str,
        step: &'static str,
    },

    #[error("{0}")]
    UnknownOption(String),

    #[error("{0}")]
    GuardFailed(String),

    #[error("cannot {action} from the {step} step")]
    InvalidTransition {
        action: &'static str,
        step: &'static str,
    },

    #[error("career {0} is not among the current matches")]
    CareerNotMatched(u32),
}

impl From<WizardError> for AppError {
    fn from(e: WizardError) -> Self {
        match e {
            WizardError::UnknownOption(_) => AppError::Validation(e.to_string()),
            WizardError::GuardFailed(_) => AppError::UnprocessableEntity(e.to_string()),
            WizardError::CareerNotMatched(_) => AppError::NotFound(e.to_string()),
            WizardError::WrongStep { .. } | WizardError::InvalidTransition { .. } => {
                AppError::Conflict(e.to_string())
            }
        }
    }
}

/// One user's pass through the questionnaire plus the text generated for it.
///
/// `explanations` and `pathways` are keyed by career id and survive `restart`.
/// `last_active` moves with `updated_at` and drives idle expiry in the store.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSession {
    pub id: Uuid,
    pub step: WizardStep,
    pub profile: UserProfile,
    pub matches: Vec<MatchResult>,
    pub explanations: HashMap<u32, String>,
    pub pathways: HashMap<u32, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub last_active: Instant,
}

impl WizardSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            step: WizardStep::Interests,
            profile: UserProfile::default(),
            matches: Vec::new(),
            explanations: HashMap::new(),
            pathways: HashMap::new(),
            created_at: now,
            updated_at: now,
            last_active: Instant::now(),
        }
    }

    /// Toggles one option. Only the step that owns the selection kind accepts it.
    pub fn select(&mut self, selection: Selection, catalog: &Catalog) -> Result<(), WizardError> {
        let allowed = matches!(
            (&self.step, &selection),
            (WizardStep::Interests, Selection::Interest(_))
                | (WizardStep::Skills, Selection::CurrentSkill(_))
                | (WizardStep::Skills, Selection::DesiredSkill(_))
                | (WizardStep::Values, Selection::Sdg(_))
        );
        if !allowed {
            return Err(WizardError::WrongStep {
                kind: selection.kind_str(),
                step: self.step.label(),
            });
        }

        let known = match &selection {
            Selection::Interest(v) => catalog.is_known_interest(v),
            Selection::CurrentSkill(v) | Selection::DesiredSkill(v) => catalog.is_known_skill(v),
            Selection::Sdg(id) => catalog.is_known_sdg(*id),
        };
        if !known {
            return Err(WizardError::UnknownOption(format!(
                "unknown {}: {}",
                selection.kind_str(),
                match &selection {
                    Selection::Interest(v)
                    | Selection::CurrentSkill(v)
                    | Selection::DesiredSkill(v) => v.clone(),
                    Selection::Sdg(id) => id.to_string(),
                }
            )));
        }

        self.profile = std::mem::take(&mut self.profile).apply(selection);
        self.touch();
        Ok(())
    }

    /// Moves forward one step if the guard holds. Entering Results runs the matcher.
    pub fn advance(&mut self, catalog: &Catalog) -> Result<WizardStep, WizardError> {
        let profile = &self.profile;
        let next = match self.step {
            WizardStep::Interests => {
                if profile.selected_interests.len() != MAX_SELECTIONS {
                    return Err(WizardError::GuardFailed(format!(
                        "select exactly {MAX_SELECTIONS} interests (have {})",
                        profile.selected_interests.len()
                    )));
                }
                WizardStep::Skills
            }
            WizardStep::Skills => {
                if profile.current_skills.len() != MAX_SELECTIONS
                    || profile.desired_skills.len() != MAX_SELECTIONS
                {
                    return Err(WizardError::GuardFailed(format!(
                        "select exactly {MAX_SELECTIONS} current and {MAX_SELECTIONS} desired skills (have {} and {})",
                        profile.current_skills.len(),
                        profile.desired_skills.len()
                    )));
                }
                WizardStep::Values
            }
            WizardStep::Values => {
                let count = profile.selected_sdgs.len();
                if count == 0 || count > MAX_SELECTIONS {
                    return Err(WizardError::GuardFailed(format!(
                        "select between 1 and {MAX_SELECTIONS} SDGs (have {count})"
                    )));
                }
                self.matches = match_careers(profile, catalog);
                WizardStep::Results(ResultsView::List)
            }
            WizardStep::Results(_) => {
                return Err(WizardError::InvalidTransition {
                    action: "advance",
                    step: self.step.label(),
                })
            }
        };

        self.step = next;
        self.touch();
        Ok(next)
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let previous = match self.step {
            WizardStep::Skills => WizardStep::Interests,
            WizardStep::Values => WizardStep::Skills,
            WizardStep::Results(ResultsView::Detail { .. }) => {
                WizardStep::Results(ResultsView::List)
            }
            WizardStep::Interests | WizardStep::Results(ResultsView::List) => {
                return Err(WizardError::InvalidTransition {
                    action: "go back",
                    step: self.step.label(),
                })
            }
        };
        self.step = previous;
        self.touch();
        Ok(previous)
    }

    /// Enters the detail view for one of the current matches.
    pub fn open_career(&mut self, career_id: u32) -> Result<&MatchResult, WizardError> {
        if !matches!(self.step, WizardStep::Results(_)) {
            return Err(WizardError::InvalidTransition {
                action: "open a career",
                step: self.step.label(),
            });
        }
        let index = self
            .matches
            .iter()
            .position(|m| m.career.id == career_id)
            .ok_or(WizardError::CareerNotMatched(career_id))?;

        self.step = WizardStep::Results(ResultsView::Detail { career_id });
        self.touch();
        Ok(&self.matches[index])
    }

    /// Leaves the detail view for the match list.
    pub fn close_career(&mut self) -> Result<(), WizardError> {
        if !matches!(self.step, WizardStep::Results(ResultsView::Detail { .. })) {
            return Err(WizardError::InvalidTransition {
                action: "return to the match list",
                step: self.step.label(),
            });
        }
        self.step = WizardStep::Results(ResultsView::List);
        self.touch();
        Ok(())
    }

    /// Starts over with an empty profile. Generated text stays cached.
    pub fn restart(&mut self) {
        self.step = WizardStep::Interests;
        self.profile = UserProfile::default();
        self.matches.clear();
        self.touch();
    }

    pub fn top_match(&self) -> Option<&MatchResult> {
        self.matches.first()
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        let current = self.step.number();
        STEP_LABELS
            .iter()
            .zip(1u8..)
            .map(|(&label, number)| StepProgress {
                number,
                label,
                status: if number == current {
                    StepStatus::Active
                } else if number < current {
                    StepStatus::Complete
                } else {
                    StepStatus::Inactive
                },
            })
            .collect()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.last_active = Instant::now();
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_all(session: &mut WizardSession, catalog: &Catalog, selections: Vec<Selection>) {
        for s in selections {
            session.select(s, catalog).unwrap();
        }
    }

    fn interests() -> Vec<Selection> {
        ["Biology", "Chemistry", "Physics"]
            .into_iter()
            .map(|s| Selection::Interest(s.to_string()))
            .collect()
    }

    fn skills() -> Vec<Selection> {
        let current = ["Data analysis", "Problem solving", "Working outdoors"]
            .into_iter()
            .map(|s| Selection::CurrentSkill(s.to_string()));
        let desired = ["Strategic thinking", "Coding", "Decision-making"]
            .into_iter()
            .map(|s| Selection::DesiredSkill(s.to_string()));
        current.chain(desired).collect()
    }

    /// Session advanced to Results with the science profile.
    fn completed(catalog: &Catalog) -> WizardSession {
        let mut session = WizardSession::new();
        select_all(&mut session, catalog, interests());
        session.advance(catalog).unwrap();
        select_all(&mut session, catalog, skills());
        session.advance(catalog).unwrap();
        select_all(
            &mut session,
            catalog,
            vec![Selection::Sdg(13), Selection::Sdg(14), Selection::Sdg(15)],
        );
        session.advance(catalog).unwrap();
        session
    }

    #[test]
    fn test_new_session_starts_at_interests() {
        let session = WizardSession::new();
        assert_eq!(session.step, WizardStep::Interests);
        assert!(session.matches.is_empty());
    }

    #[test]
    fn test_full_walkthrough_reaches_results() {
        let catalog = Catalog::builtin().unwrap();
        let session = completed(&catalog);

        assert_eq!(session.step, WizardStep::Results(ResultsView::List));
        assert_eq!(session.matches.len(), 6);
        assert_eq!(session.top_match().unwrap().career.title, "Marine Biologist");
    }

    #[test]
    fn test_interest_guard_requires_exactly_three() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = WizardSession::new();
        session
            .select(Selection::Interest("Biology".to_string()), &catalog)
            .unwrap();

        let err = session.advance(&catalog).unwrap_err();
        assert!(matches!(err, WizardError::GuardFailed(ref m) if m.contains("have 1")));
        assert_eq!(session.step, WizardStep::Interests);
    }

    #[test]
    fn test_skills_guard_requires_both_kinds() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = WizardSession::new();
        select_all(&mut session, &catalog, interests());
        session.advance(&catalog).unwrap();
        select_all(&mut session, &catalog, skills()[..3].to_vec());

        assert!(matches!(
            session.advance(&catalog),
            Err(WizardError::GuardFailed(_))
        ));
        assert_eq!(session.step, WizardStep::Skills);
    }

    #[test]
    fn test_values_guard_requires_at_least_one_sdg() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = WizardSession::new();
        select_all(&mut session, &catalog, interests());
        session.advance(&catalog).unwrap();
        select_all(&mut session, &catalog, skills());
        session.advance(&catalog).unwrap();

        assert!(session.advance(&catalog).is_err());
        session.select(Selection::Sdg(5), &catalog).unwrap();
        assert_eq!(
            session.advance(&catalog).unwrap(),
            WizardStep::Results(ResultsView::List)
        );
    }

    #[test]
    fn test_fourth_interest_is_ignored() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = WizardSession::new();
        select_all(&mut session, &catalog, interests());
        session
            .select(Selection::Interest("History".to_string()), &catalog)
            .unwrap();
        assert_eq!(
            session.profile.selected_interests,
            vec!["Biology", "Chemistry", "Physics"]
        );
    }

    #[test]
    fn test_selection_outside_its_step_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = WizardSession::new();
        let err = session.select(Selection::Sdg(13), &catalog).unwrap_err();
        assert_eq!(
            err,
            WizardError::WrongStep {
                kind: "sdg",
                step: "interests"
            }
        );
    }

    #[test]
    fn test_unknown_option_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = WizardSession::new();
        let err = session
            .select(Selection::Interest("Astrology".to_string()), &catalog)
            .unwrap_err();
        assert!(matches!(err, WizardError::UnknownOption(ref m) if m.contains("Astrology")));
        assert!(session.profile.selected_interests.is_empty());
    }

    #[test]
    fn test_back_navigation() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = WizardSession::new();
        assert!(session.back().is_err());

        select_all(&mut session, &catalog, interests());
        session.advance(&catalog).unwrap();
        assert_eq!(session.back().unwrap(), WizardStep::Interests);
        // Selections survive going back.
        assert_eq!(session.profile.selected_interests.len(), 3);
    }

    #[test]
    fn test_no_back_from_results_list() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = completed(&catalog);
        assert!(matches!(
            session.back(),
            Err(WizardError::InvalidTransition { .. })
        ));
        assert!(session.advance(&catalog).is_err());
    }

    #[test]
    fn test_open_and_close_career_detail() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = completed(&catalog);

        let opened = session.open_career(5).unwrap();
        assert_eq!(opened.career.title, "Hydrologist");
        assert_eq!(
            session.step,
            WizardStep::Results(ResultsView::Detail { career_id: 5 })
        );

        assert_eq!(session.back().unwrap(), WizardStep::Results(ResultsView::List));

        session.open_career(12).unwrap();
        session.close_career().unwrap();
        assert_eq!(session.step, WizardStep::Results(ResultsView::List));
        assert!(session.close_career().is_err());
    }

    #[test]
    fn test_open_career_must_be_matched() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = completed(&catalog);
        // Digital Learning Developer scores 1 and does not make the top 6.
        assert_eq!(
            session.open_career(4).unwrap_err(),
            WizardError::CareerNotMatched(4)
        );
    }

    #[test]
    fn test_open_career_before_results_rejected() {
        let mut session = WizardSession::new();
        assert!(matches!(
            session.open_career(12),
            Err(WizardError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_restart_clears_profile_but_keeps_generated_text() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = completed(&catalog);
        session.explanations.insert(12, "cached".to_string());
        session.pathways.insert(12, "cached pathway".to_string());

        session.restart();

        assert_eq!(session.step, WizardStep::Interests);
        assert_eq!(session.profile, UserProfile::default());
        assert!(session.matches.is_empty());
        assert_eq!(session.explanations.get(&12).unwrap(), "cached");
        assert_eq!(session.pathways.len(), 1);
    }

    #[test]
    fn test_progress_statuses() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = WizardSession::new();
        select_all(&mut session, &catalog, interests());
        session.advance(&catalog).unwrap();

        let statuses: Vec<StepStatus> = session.progress().iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Complete,
                StepStatus::Active,
                StepStatus::Inactive,
                StepStatus::Inactive
            ]
        );
        assert_eq!(session.progress()[3].label, "Results");
    }

    #[test]
    fn test_wizard_error_maps_to_app_error() {
        assert!(matches!(
            AppError::from(WizardError::GuardFailed("x".into())),
            AppError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            AppError::from(WizardError::CareerNotMatched(1)),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(WizardError::WrongStep {
                kind: "sdg",
                step: "skills"
            }),
            AppError::Conflict(_)
        ));
    }

    #[test]
    fn test_step_wire_format() {
        let json = serde_json::to_value(WizardStep::Results(ResultsView::Detail { career_id: 3 }))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"step": "results", "results": {"view": "detail", "career_id": 3}})
        );
        assert_eq!(
            serde_json::to_value(WizardStep::Skills).unwrap(),
            serde_json::json!({"step": "skills"})
        );
    }
}
