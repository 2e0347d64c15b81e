//! Domain models for professions and sectors.

use serde::{Deserialize, Serialize};

/// The part of a professional profile the catalog cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub profession: Option<String>,
}

impl ProfileRecord {
    pub fn new(profession: Option<&str>) -> Self {
        Self {
            profession: profession.map(str::to_string),
        }
    }

    /// Trimmed profession label, or `None` when missing or blank.
    pub fn profession_label(&self) -> Option<&str> {
        self.profession
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}

/// A professional-role profile as listed on the search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: String,
    pub full_name: String,
    pub profession: Option<String>,
    pub city: Option<String>,
    pub avatar_url: Option<String>,
}

impl Professional {
    pub fn to_profile_record(&self) -> ProfileRecord {
        ProfileRecord {
            profession: self.profession.clone(),
        }
    }
}

/// Canonical profession label mapped to a sector (e.g. "Plumber" -> "Home Services")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyEntry {
    pub profession: String,
    pub sector: String,
}

impl TaxonomyEntry {
    /// Builds a trimmed entry. Returns `None` if either field is blank.
    pub fn new(profession: &str, sector: &str) -> Option<Self> {
        let profession = profession.trim();
        let sector = sector.trim();
        if profession.is_empty() || sector.is_empty() {
            return None;
        }
        Some(Self {
            profession: profession.to_string(),
            sector: sector.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionCount {
    pub name: String,
    pub count: usize,
}

/// All professions in use under one sector, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorGroup {
    pub sector_name: String,
    pub professions: Vec<ProfessionCount>,
}

impl SectorGroup {
    pub fn total(&self) -> usize {
        self.professions.iter().map(|p| p.count).sum()
    }
}

/// Sector groups sorted by name, with the "Other" sector last.
pub type Catalog = Vec<SectorGroup>;

/// Catalog plus the sector selected for the current request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub sectors: Catalog,
    pub active_sector: Option<String>,
    pub total_professionals: usize,
}

/// Filters for the professional search page (`?q=` and `?category=`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalFilter {
    pub q: Option<String>,
    pub category: Option<String>,
}
