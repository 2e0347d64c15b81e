//! Traits for profession repository and service.

use async_trait::async_trait;

use crate::Result;

use super::{CatalogView, Professional, ProfessionalFilter, TaxonomyEntry};

/// Read-only access to the hosted backend's professional and taxonomy rows.
#[async_trait]
pub trait ProfessionRepositoryTrait: Send + Sync {
    async fn list_professionals(&self) -> Result<Vec<Professional>>;
    async fn list_taxonomy(&self) -> Result<Vec<TaxonomyEntry>>;
}

/// Service trait for the categories and search pages.
#[async_trait]
pub trait ProfessionServiceTrait: Send + Sync {
    async fn get_catalog(&self, sector: Option<&str>) -> Result<CatalogView>;
    async fn suggest_professions(&self, query: &str, limit: Option<usize>) -> Result<Vec<String>>;
    async fn search_professionals(&self, filter: ProfessionalFilter) -> Result<Vec<Professional>>;
}
