//! Career Matcher: deterministic weighted-overlap scoring of a `UserProfile`
//! against every career in the `Catalog`.
//!
//! Algorithm, per career (no early exit):
//! 1. +3 per selected interest the career is tagged with
//! 2. +2 per current skill the career lists
//! 3. +1 per desired skill the career lists
//! 4. +3 per selected SDG the career supports
//!
//! Careers scoring 0 are dropped. The rest are stable-sorted by score
//! descending (catalog order breaks ties) and truncated to `MAX_RESULTS`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::models::CareerRecord;
use crate::catalog::Catalog;
use crate::matching::profile::UserProfile;

/// Number of matches returned to the caller.
pub const MAX_RESULTS: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub interest: u32,
    pub current_skill: u32,
    pub desired_skill: u32,
    pub sdg: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest: 3,
            current_skill: 2,
            desired_skill: 1,
            sdg: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatches {
    pub current: Vec<String>,
    pub desired: Vec<String>,
}

/// Match evidence: the user's selections that intersect the career's tags,
/// each list in the user's selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub interest_matches: Vec<String>,
    pub skill_matches: SkillMatches,
    pub sdg_matches: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub career: Arc<CareerRecord>,
    pub score: u32,
    pub match_details: MatchDetails,
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// Ranks the catalog against `profile` with the default weights and result cap.
pub fn match_careers(profile: &UserProfile, catalog: &Catalog) -> Vec<MatchResult> {
    match_careers_with(profile, catalog, &ScoringWeights::default(), MAX_RESULTS)
}

pub fn match_careers_with(
    profile: &UserProfile,
    catalog: &Catalog,
    weights: &ScoringWeights,
    limit: usize,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = catalog
        .careers
        .iter()
        .map(|career| score_career(profile, career, weights))
        .filter(|result| result.score > 0)
        .collect();

    // sort_by is stable: equal scores keep catalog order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}

fn score_career(
    profile: &UserProfile,
    career: &Arc<CareerRecord>,
    weights: &ScoringWeights,
) -> MatchResult {
    let mut details = MatchDetails::default();
    let mut score = 0;

    for interest in &profile.selected_interests {
        if career.interests.contains(interest) {
            score += weights.interest;
            details.interest_matches.push(interest.clone());
        }
    }

    for skill in &profile.current_skills {
        if career.skills.contains(skill) {
            score += weights.current_skill;
            details.skill_matches.current.push(skill.clone());
        }
    }

    for skill in &profile.desired_skills {
        if career.skills.contains(skill) {
            score += weights.desired_skill;
            details.skill_matches.desired.push(skill.clone());
        }
    }

    for sdg in &profile.selected_sdgs {
        if career.sdgs.contains(sdg) {
            score += weights.sdg;
            details.sdg_matches.push(*sdg);
        }
    }

    MatchResult {
        career: Arc::clone(career),
        score,
        match_details: details,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
