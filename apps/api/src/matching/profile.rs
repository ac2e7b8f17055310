//! UserProfile: the user's questionnaire answers, updated by value through `apply`.

use serde::{Deserialize, Serialize};

/// Cap on every selection field.
pub const MAX_SELECTIONS: usize = 3;

/// One toggle event from the questionnaire, keyed by selection kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Selection {
    Interest(String),
    CurrentSkill(String),
    DesiredSkill(String),
    Sdg(u8),
}

impl Selection {
    pub fn kind_str(&self) -> &'static str {
        match self {
            Selection::Interest(_) => "interest",
            Selection::CurrentSkill(_) => "current_skill",
            Selection::DesiredSkill(_) => "desired_skill",
            Selection::Sdg(_) => "sdg",
        }
    }
}

/// Ordered, duplicate-free selections. Each field holds at most `MAX_SELECTIONS` entries
/// when built through `apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub selected_interests: Vec<String>,
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub desired_skills: Vec<String>,
    #[serde(default)]
    pub selected_sdgs: Vec<u8>,
}

impl UserProfile {
    /// Returns the profile with `selection` toggled: removed if present, appended if
    /// absent and the field is under the cap, unchanged otherwise.
    pub fn apply(mut self, selection: Selection) -> Self {
        match selection {
            Selection::Interest(value) => toggle(&mut self.selected_interests, value),
            Selection::CurrentSkill(value) => toggle(&mut self.current_skills, value),
            Selection::DesiredSkill(value) => toggle(&mut self.desired_skills, value),
            Selection::Sdg(id) => toggle(&mut self.selected_sdgs, id),
        }
        self
    }
}

fn toggle<T: PartialEq>(field: &mut Vec<T>, value: T) {
    if let Some(pos) = field.iter().position(|v| *v == value) {
        field.remove(pos);
    } else if field.len() < MAX_SELECTIONS {
        field.push(value);
    }
}
