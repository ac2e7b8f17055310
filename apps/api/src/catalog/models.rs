use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single career profile the matcher scores against.
/// Tags are drawn from the interest and skill taxonomies; `sdgs` are UN SDG ids (1–17).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub sdgs: Vec<u8>,
}

/// A named group of selectable options (interest subjects or skills).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyCategory {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sdg {
    pub id: u8,
    pub name: String,
}

/// On-disk shape of a versioned catalog. Mirrors `Catalog` with owned records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: String,
    pub careers: Vec<CareerRecord>,
    pub interest_categories: Vec<TaxonomyCategory>,
    pub skill_categories: Vec<TaxonomyCategory>,
    pub sdgs: Vec<Sdg>,
}

/// Career summary used by the catalog listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CareerSummary {
    pub id: u32,
    pub title: String,
    pub description: String,
}

impl From<&Arc<CareerRecord>> for CareerSummary {
    fn from(record: &Arc<CareerRecord>) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            description: record.description.clone(),
        }
    }
}
