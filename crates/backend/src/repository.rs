//! Profession repository backed by the hosted backend.
//!
//! Rows come back loosely typed (any column may be null). They are trimmed
//! and null-coalesced here so the core only ever sees clean records.

use async_trait::async_trait;
use log::debug;

use proreview_core::professions::{ProfessionRepositoryTrait, Professional, TaxonomyEntry};
use proreview_core::Result;

use crate::client::BackendClient;

pub const PROFILES_TABLE: &str = "profiles";
pub const TAXONOMY_TABLE: &str = "professions";

const PROFESSIONALS_QUERY: &str =
    "select=id,full_name,profession,city,avatar_url&role=eq.professional";
const TAXONOMY_QUERY: &str = "select=profession,sector";

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProfileRow {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct TaxonomyRow {
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

/// Converts a profile row, dropping rows without an id.
pub fn professional_from_row(row: ProfileRow) -> Option<Professional> {
    let id = match row.id? {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if id.is_empty() {
        return None;
    }

    Some(Professional {
        id,
        full_name: clean(row.full_name).unwrap_or_default(),
        profession: clean(row.profession),
        city: clean(row.city),
        avatar_url: clean(row.avatar_url),
    })
}

pub fn taxonomy_entry_from_row(row: TaxonomyRow) -> Option<TaxonomyEntry> {
    TaxonomyEntry::new(row.profession.as_deref()?, row.sector.as_deref()?)
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub struct BackendProfessionRepository {
    client: BackendClient,
}

impl BackendProfessionRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfessionRepositoryTrait for BackendProfessionRepository {
    async fn list_professionals(&self) -> Result<Vec<Professional>> {
        let rows: Vec<ProfileRow> = self
            .client
            .get_rows(PROFILES_TABLE, PROFESSIONALS_QUERY)
            .await?;
        let total = rows.len();
        let professionals: Vec<Professional> =
            rows.into_iter().filter_map(professional_from_row).collect();
        if professionals.len() < total {
            debug!(
                "Dropped {} profile rows without an id",
                total - professionals.len()
            );
        }
        Ok(professionals)
    }

    async fn list_taxonomy(&self) -> Result<Vec<TaxonomyEntry>> {
        let rows: Vec<TaxonomyRow> = self
            .client
            .get_rows(TAXONOMY_TABLE, TAXONOMY_QUERY)
            .await?;
        let total = rows.len();
        let entries: Vec<TaxonomyEntry> = rows
            .into_iter()
            .filter_map(taxonomy_entry_from_row)
            .collect();
        if entries.len() < total {
            debug!(
                "Dropped {} taxonomy rows with a blank profession or sector",
                total - entries.len()
            );
        }
        Ok(entries)
    }
}
