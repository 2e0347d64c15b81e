//! Professions module - domain models, services, and traits.
//!
//! Provides the sector catalog, profession suggestions and professional
//! search used by the categories and search pages.

mod catalog;
mod professions_model;
mod professions_service;
mod professions_traits;
mod search;
mod suggestions;

#[cfg(test)]
mod professions_service_tests;

pub use catalog::{build_catalog, resolve_active_sector};
pub use professions_model::{
    Catalog, CatalogView, ProfessionCount, Professional, ProfessionalFilter, ProfileRecord,
    SectorGroup, TaxonomyEntry,
};
pub use professions_service::ProfessionService;
pub use professions_traits::{ProfessionRepositoryTrait, ProfessionServiceTrait};
pub use search::filter_professionals;
pub use suggestions::{suggest, SuggestionTicket, SuggestionTracker};
