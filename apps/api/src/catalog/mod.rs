//! Reference Catalog: the immutable career table plus the interest, skill and SDG lookups.
//!
//! Loaded once at startup (built-in data or a versioned JSON file) and shared
//! read-only behind an `Arc` for the lifetime of the process.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use thiserror::Error;

pub mod data;
pub mod handlers;
pub mod models;

use models::{CareerRecord, CatalogFile, Sdg, TaxonomyCategory};

/// Number of UN Sustainable Development Goals. SDG ids are 1..=SDG_COUNT.
pub const SDG_COUNT: u8 = 17;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("career id must be positive (title: {title})")]
    ZeroId { title: String },

    #[error("duplicate career id {0}")]
    DuplicateId(u32),

    #[error("career {career_id} references SDG {sdg}, outside 1..={SDG_COUNT}")]
    SdgOutOfRange { career_id: u32, sdg: u8 },

    #[error("career {career_id} lists {tag:?} more than once")]
    DuplicateTag { career_id: u32, tag: String },

    #[error("SDG table must list ids 1..={SDG_COUNT} exactly once, in order")]
    MalformedSdgTable,

    #[error("{0} taxonomy is empty")]
    EmptyTaxonomy(&'static str),
}

/// The read-only reference catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub version: String,
    pub careers: Vec<Arc<CareerRecord>>,
    pub interest_categories: Vec<TaxonomyCategory>,
    pub skill_categories: Vec<TaxonomyCategory>,
    pub sdgs: Vec<Sdg>,
}

impl Catalog {
    /// The data set the service ships with.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_file(CatalogFile {
            version: data::BUILTIN_VERSION.to_string(),
            careers: data::careers(),
            interest_categories: data::interest_categories(),
            skill_categories: data::skill_categories(),
            sdgs: data::sdgs(),
        })
    }

    /// Loads and validates a catalog from a JSON file in `CatalogFile` shape.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .with_context(|| format!("catalog file {} is not valid JSON", path.display()))?;
        let catalog = Self::from_file(file)
            .with_context(|| format!("catalog file {} failed validation", path.display()))?;
        Ok(catalog)
    }

    fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let catalog = Self {
            version: file.version,
            careers: file.careers.into_iter().map(Arc::new).collect(),
            interest_categories: file.interest_categories,
            skill_categories: file.skill_categories,
            sdgs: file.sdgs,
        };

        for warning in catalog.validate()? {
            tracing::warn!("Catalog {}: {warning}", catalog.version);
        }

        Ok(catalog)
    }

    /// Checks structural invariants. Returns non-fatal warnings on success.
    ///
    /// A career tag missing from its taxonomy is only a warning: the wizard can
    /// never offer it, so it simply never contributes to a score.
    pub fn validate(&self) -> Result<Vec<String>, CatalogError> {
        if self.interest_categories.iter().all(|c| c.items.is_empty()) {
            return Err(CatalogError::EmptyTaxonomy("interest"));
        }
        if self.skill_categories.iter().all(|c| c.items.is_empty()) {
            return Err(CatalogError::EmptyTaxonomy("skill"));
        }

        let sdg_ids: Vec<u8> = self.sdgs.iter().map(|s| s.id).collect();
        if sdg_ids != (1..=SDG_COUNT).collect::<Vec<_>>() {
            return Err(CatalogError::MalformedSdgTable);
        }

        let mut warnings = Vec::new();
        let mut seen_ids = HashSet::new();

        for career in &self.careers {
            if career.id == 0 {
                return Err(CatalogError::ZeroId {
                    title: career.title.clone(),
                });
            }
            if !seen_ids.insert(career.id) {
                return Err(CatalogError::DuplicateId(career.id));
            }
            if let Some(&sdg) = career
                .sdgs
                .iter()
                .find(|&&s| s == 0 || s > SDG_COUNT)
            {
                return Err(CatalogError::SdgOutOfRange {
                    career_id: career.id,
                    sdg,
                });
            }

            check_unique(career.id, career.interests.iter().cloned())?;
            check_unique(career.id, career.skills.iter().cloned())?;
            check_unique(career.id, career.sdgs.iter().map(|s| s.to_string()))?;

            for interest in &career.interests {
                if !self.is_known_interest(interest) {
                    warnings.push(format!(
                        "career {} ({}) is tagged with interest {interest:?}, which no category lists",
                        career.id, career.title
                    ));
                }
            }
            for skill in &career.skills {
                if !self.is_known_skill(skill) {
                    warnings.push(format!(
                        "career {} ({}) is tagged with skill {skill:?}, which no category lists",
                        career.id, career.title
                    ));
                }
            }
        }

        Ok(warnings)
    }

    pub fn career(&self, id: u32) -> Option<&Arc<CareerRecord>> {
        self.careers.iter().find(|c| c.id == id)
    }

    pub fn sdg_name(&self, id: u8) -> Option<&str> {
        self.sdgs
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
    }

    /// Names of the given SDG ids in catalog order. Unknown ids are skipped.
    pub fn sdg_names(&self, ids: &[u8]) -> Vec<&str> {
        self.sdgs
            .iter()
            .filter(|s| ids.contains(&s.id))
            .map(|s| s.name.as_str())
            .collect()
    }

    pub fn is_known_interest(&self, interest: &str) -> bool {
        self.interest_categories
            .iter()
            .any(|c| c.items.iter().any(|i| i == interest))
    }

    pub fn is_known_skill(&self, skill: &str) -> bool {
        self.skill_categories
            .iter()
            .any(|c| c.items.iter().any(|s| s == skill))
    }

    pub fn is_known_sdg(&self, id: u8) -> bool {
        self.sdg_name(id).is_some()
    }
}

fn check_unique(career_id: u32, tags: impl Iterator<Item = String>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for tag in tags {
        if !seen.insert(tag.clone()) {
            return Err(CatalogError::DuplicateTag { career_id, tag });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn builtin_file() -> CatalogFile {
        CatalogFile {
            version: "test".to_string(),
            careers: data::careers(),
            interest_categories: data::interest_categories(),
            skill_categories: data::skill_categories(),
            sdgs: data::sdgs(),
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.version, "2025.1");
        assert_eq!(catalog.careers.len(), 28);
        assert_eq!(catalog.sdgs.len(), 17);
        assert_eq!(catalog.interest_categories.len(), 6);
        assert_eq!(catalog.skill_categories.len(), 6);
    }

    #[test]
    fn test_builtin_catalog_flags_untaxonomized_education_tag() {
        let catalog = Catalog::builtin().unwrap();
        let warnings = catalog.validate().unwrap();
        assert_eq!(warnings.len(), 1, "{warnings:?}");
        assert!(warnings[0].contains("Education"));
        assert!(warnings[0].contains("Digital Learning Developer"));
    }

    #[test]
    fn test_career_lookup() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.career(12).unwrap().title, "Marine Biologist");
        assert!(catalog.career(999).is_none());
    }

    #[test]
    fn test_sdg_names_follow_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.sdg_names(&[14, 13, 99, 2]),
            vec!["Zero Hunger", "Climate Action", "Life Below Water"]
        );
    }

    #[test]
    fn test_known_option_lookups() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.is_known_interest("Biology"));
        assert!(!catalog.is_known_interest("Astrology"));
        assert!(catalog.is_known_skill("Working outdoors"));
        assert!(!catalog.is_known_skill("Juggling"));
        assert!(catalog.is_known_sdg(17));
        assert!(!catalog.is_known_sdg(0));
        assert!(!catalog.is_known_sdg(18));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut file = builtin_file();
        file.careers[1].id = file.careers[0].id;
        assert_eq!(
            Catalog::from_file(file).unwrap_err(),
            CatalogError::DuplicateId(1)
        );
    }

    #[test]
    fn test_zero_id_rejected() {
        let mut file = builtin_file();
        file.careers[0].id = 0;
        assert!(matches!(
            Catalog::from_file(file),
            Err(CatalogError::ZeroId { .. })
        ));
    }

    #[test]
    fn test_sdg_out_of_range_rejected() {
        let mut file = builtin_file();
        file.careers[0].sdgs.push(18);
        assert_eq!(
            Catalog::from_file(file).unwrap_err(),
            CatalogError::SdgOutOfRange {
                career_id: 1,
                sdg: 18
            }
        );
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let mut file = builtin_file();
        let first = file.careers[0].skills[0].clone();
        file.careers[0].skills.push(first);
        assert!(matches!(
            Catalog::from_file(file),
            Err(CatalogError::DuplicateTag { career_id: 1, .. })
        ));
    }

    #[test]
    fn test_truncated_sdg_table_rejected() {
        let mut file = builtin_file();
        file.sdgs.pop();
        assert_eq!(
            Catalog::from_file(file).unwrap_err(),
            CatalogError::MalformedSdgTable
        );
    }

    #[test]
    fn test_empty_taxonomy_rejected() {
        let mut file = builtin_file();
        file.skill_categories.clear();
        assert_eq!(
            Catalog::from_file(file).unwrap_err(),
            CatalogError::EmptyTaxonomy("skill")
        );
    }

    #[test]
    fn test_from_json_file_roundtrips_builtin_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&builtin_file()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.version, "test");
        assert_eq!(catalog.careers.len(), 28);
    }

    #[test]
    fn test_from_json_file_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = Catalog::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_from_json_file_missing_path() {
        let err = Catalog::from_json_file(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read catalog file"));
    }
}
