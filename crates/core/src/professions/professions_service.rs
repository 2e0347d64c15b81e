//! Profession service implementation.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::constants::{DEFAULT_SUGGESTION_LIMIT, MAX_SUGGESTION_LIMIT, MIN_SUGGESTION_QUERY_LEN};
use crate::errors::ValidationError;
use crate::Result;

use super::{
    build_catalog, filter_professionals, resolve_active_sector, suggest, CatalogView,
    ProfessionRepositoryTrait, ProfessionServiceTrait, Professional, ProfessionalFilter,
    ProfileRecord,
};

pub struct ProfessionService {
    repository: Arc<dyn ProfessionRepositoryTrait>,
}

impl ProfessionService {
    pub fn new(repository: Arc<dyn ProfessionRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn validate_limit(limit: Option<usize>) -> Result<usize> {
        match limit {
            None => Ok(DEFAULT_SUGGESTION_LIMIT),
            Some(n) if (1..=MAX_SUGGESTION_LIMIT).contains(&n) => Ok(n),
            Some(n) => Err(ValidationError::InvalidInput(format!(
                "limit must be between 1 and {}, got {}",
                MAX_SUGGESTION_LIMIT, n
            ))
            .into()),
        }
    }
}

#[async_trait]
impl ProfessionServiceTrait for ProfessionService {
    async fn get_catalog(&self, sector: Option<&str>) -> Result<CatalogView> {
        let (professionals, taxonomy) = tokio::try_join!(
            self.repository.list_professionals(),
            self.repository.list_taxonomy()
        )?;

        let profiles: Vec<ProfileRecord> = professionals
            .iter()
            .map(Professional::to_profile_record)
            .collect();
        let sectors = build_catalog(&profiles, &taxonomy);
        let active_sector =
            resolve_active_sector(&sectors, sector).map(|group| group.sector_name.clone());
        let total_professionals = sectors.iter().map(|group| group.total()).sum();

        Ok(CatalogView {
            sectors,
            active_sector,
            total_professionals,
        })
    }

    async fn suggest_professions(&self, query: &str, limit: Option<usize>) -> Result<Vec<String>> {
        let limit = Self::validate_limit(limit)?;
        // Nothing to suggest; skip the backend round trip.
        if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
            return Ok(Vec::new());
        }

        let taxonomy = self.repository.list_taxonomy().await?;
        let suggestions = suggest(query, &taxonomy, limit);
        debug!(
            "{} suggestions for '{}' out of {} taxonomy entries",
            suggestions.len(),
            query,
            taxonomy.len()
        );
        Ok(suggestions)
    }

    async fn search_professionals(&self, filter: ProfessionalFilter) -> Result<Vec<Professional>> {
        let professionals = self.repository.list_professionals().await?;
        Ok(filter_professionals(&professionals, &filter))
    }
}
