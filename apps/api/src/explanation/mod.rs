//! Explanation: turns match evidence into prose.
//!
//! `TextGenerator` is the injected capability: `LlmTextGenerator` (live service) or
//! `TemplateTextGenerator` (local templates), chosen once at startup and carried in
//! `AppState` as `Arc<dyn TextGenerator>`. `Explainer` wraps it with the fallback:
//! a single attempt, and on any error a warning plus the local template.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::catalog::models::CareerRecord;
use crate::catalog::Catalog;
use crate::llm_client::{LlmClient, LlmError};
use crate::matching::matcher::{MatchDetails, MatchResult};
use crate::matching::profile::UserProfile;

pub mod fallback;
pub mod prompts;

/// Everything a generator needs to explain one match.
#[derive(Debug)]
pub struct RationaleRequest<'a> {
    pub career: &'a CareerRecord,
    pub profile: &'a UserProfile,
    pub details: &'a MatchDetails,
    /// Names of every SDG the user selected, in catalog order.
    pub sdg_names: Vec<&'a str>,
    /// The subset of selected SDGs this career supports, with names.
    pub matched_sdgs: Vec<(u8, &'a str)>,
}

impl<'a> RationaleRequest<'a> {
    pub fn new(result: &'a MatchResult, profile: &'a UserProfile, catalog: &'a Catalog) -> Self {
        Self {
            career: &result.career,
            profile,
            details: &result.match_details,
            sdg_names: catalog.sdg_names(&profile.selected_sdgs),
            matched_sdgs: result
                .match_details
                .sdg_matches
                .iter()
                .filter_map(|&id| catalog.sdg_name(id).map(|name| (id, name)))
                .collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short label for logs and responses: "llm" | "template".
    fn backend(&self) -> &'static str;

    async fn rationale(&self, request: &RationaleRequest<'_>) -> Result<String, LlmError>;

    async fn pathway(&self, career: &CareerRecord) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Implementations
// ────────────────────────────────────────────────────────────────────────────

/// Live generator backed by the chat-completion service.
pub struct LlmTextGenerator(pub LlmClient);

#[async_trait]
impl TextGenerator for LlmTextGenerator {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn rationale(&self, request: &RationaleRequest<'_>) -> Result<String, LlmError> {
        let prompt = prompts::rationale_prompt(
            &request.career.title,
            &request.career.description,
            &request.profile.selected_interests,
            &request.profile.current_skills,
            &request.profile.desired_skills,
            &request.sdg_names,
        );
        self.0
            .complete(
                prompts::RATIONALE_SYSTEM,
                &prompt,
                prompts::RATIONALE_MAX_TOKENS,
            )
            .await
    }

    async fn pathway(&self, career: &CareerRecord) -> Result<String, LlmError> {
        let prompt = prompts::pathway_prompt(&career.title);
        self.0
            .complete(prompts::PATHWAY_SYSTEM, &prompt, prompts::PATHWAY_MAX_TOKENS)
            .await
    }
}

/// Offline generator. Never fails.
pub struct TemplateTextGenerator;

#[async_trait]
impl TextGenerator for TemplateTextGenerator {
    fn backend(&self) -> &'static str {
        "template"
    }

    async fn rationale(&self, request: &RationaleRequest<'_>) -> Result<String, LlmError> {
        Ok(fallback::rationale(request))
    }

    async fn pathway(&self, career: &CareerRecord) -> Result<String, LlmError> {
        Ok(fallback::pathway(career))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Explainer
// ────────────────────────────────────────────────────────────────────────────

/// Generated text plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedText {
    pub text: String,
    pub source: &'static str,
}

#[derive(Clone)]
pub struct Explainer {
    generator: Arc<dyn TextGenerator>,
}

impl Explainer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn backend(&self) -> &'static str {
        self.generator.backend()
    }

    /// Rationale for one match. Falls back to the local template on any generator error.
    pub async fn rationale(
        &self,
        result: &MatchResult,
        profile: &UserProfile,
        catalog: &Catalog,
    ) -> GeneratedText {
        let request = RationaleRequest::new(result, profile, catalog);
        match self.generator.rationale(&request).await {
            Ok(text) => GeneratedText {
                text,
                source: self.generator.backend(),
            },
            Err(e) => {
                warn!(
                    "Rationale generation failed for career {} ({}): {e}; using local template",
                    result.career.id, result.career.title
                );
                GeneratedText {
                    text: fallback::rationale(&request),
                    source: "fallback",
                }
            }
        }
    }

    /// Educational pathway for one career. Falls back to the local template on any error.
    pub async fn pathway(&self, career: &CareerRecord) -> GeneratedText {
        match self.generator.pathway(career).await {
            Ok(text) => GeneratedText {
                text,
                source: self.generator.backend(),
            },
            Err(e) => {
                warn!(
                    "Pathway generation failed for career {} ({}): {e}; using local template",
                    career.id, career.title
                );
                GeneratedText {
                    text: fallback::pathway(career),
                    source: "fallback",
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::matching::matcher::match_careers;

    /// Generator that fails every call, standing in for an unreachable service.
    pub(crate) struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        fn backend(&self) -> &'static str {
            "failing"
        }

        async fn rationale(&self, _request: &RationaleRequest<'_>) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            })
        }

        async fn pathway(&self, _career: &CareerRecord) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            selected_interests: vec!["Biology".into(), "Chemistry".into(), "Physics".into()],
            current_skills: vec![
                "Data analysis".into(),
                "Problem solving".into(),
                "Working outdoors".into(),
            ],
            desired_skills: vec![
                "Strategic thinking".into(),
                "Coding".into(),
                "Decision-making".into(),
            ],
            selected_sdgs: vec![15, 13, 14],
        }
    }

    #[test]
    fn test_request_collects_sdg_names_in_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let profile = profile();
        let matches = match_careers(&profile, &catalog);
        let request = RationaleRequest::new(&matches[0], &profile, &catalog);

        assert_eq!(
            request.sdg_names,
            vec!["Climate Action", "Life Below Water", "Life on Land"]
        );
        assert_eq!(request.matched_sdgs[0], (15, "Life on Land"));
    }

    #[tokio::test]
    async fn test_failing_generator_falls_back_to_template() {
        let catalog = Catalog::builtin().unwrap();
        let profile = profile();
        let matches = match_careers(&profile, &catalog);
        let explainer = Explainer::new(Arc::new(FailingGenerator));

        let rationale = explainer.rationale(&matches[0], &profile, &catalog).await;
        assert_eq!(rationale.source, "fallback");
        assert!(rationale.text.starts_with("Marine Biologist draws on your interest in Biology"));
        assert!(rationale.text.contains("SDG 15: Life on Land"));

        let pathway = explainer.pathway(&matches[0].career).await;
        assert_eq!(pathway.source, "fallback");
        assert_eq!(pathway.text, fallback::pathway(&matches[0].career));
    }

    #[tokio::test]
    async fn test_template_generator_reports_its_backend() {
        let catalog = Catalog::builtin().unwrap();
        let profile = profile();
        let matches = match_careers(&profile, &catalog);
        let explainer = Explainer::new(Arc::new(TemplateTextGenerator));

        assert_eq!(explainer.backend(), "template");
        let rationale = explainer.rationale(&matches[1], &profile, &catalog).await;
        assert_eq!(rationale.source, "template");
        assert!(rationale.text.starts_with("Hydrologist"));
    }

    #[tokio::test]
    async fn test_live_generator_unreachable_falls_back() {
        let client = LlmClient::new(
            "key".to_string(),
            "http://127.0.0.1:1/v1".to_string(),
            crate::llm_client::DEFAULT_MODEL.to_string(),
            std::time::Duration::from_secs(2),
        )
        .unwrap();
        let explainer = Explainer::new(Arc::new(LlmTextGenerator(client)));
        let catalog = Catalog::builtin().unwrap();

        let pathway = explainer.pathway(catalog.career(20).unwrap()).await;
        assert_eq!(pathway.source, "fallback");
        assert!(pathway.text.contains("Doctor"));
    }
}
