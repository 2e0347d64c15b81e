use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use proreview_core::professions::{CatalogView, Professional, ProfessionalFilter};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Query for the categories page (`?sector=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    pub sector: Option<String>,
}

/// Query for search-as-you-type. `seq` is echoed back so the client can
/// drop responses for superseded keystrokes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
    pub seq: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub seq: Option<u64>,
    pub query: String,
    pub suggestions: Vec<String>,
}

// ============================================================================
// Category Endpoints
// ============================================================================

async fn get_catalog(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CatalogQuery>,
) -> ApiResult<Json<CatalogView>> {
    debug!("Building catalog (sector={:?})...", query.sector);
    let view = state
        .profession_service
        .get_catalog(query.sector.as_deref())
        .await?;
    Ok(Json(view))
}

// ============================================================================
// Search Endpoints
// ============================================================================

async fn suggest_professions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SuggestQuery>,
) -> ApiResult<Json<SuggestResponse>> {
    debug!("Suggesting professions for '{}' (seq={:?})...", query.q, query.seq);
    let suggestions = state
        .profession_service
        .suggest_professions(&query.q, query.limit)
        .await?;
    Ok(Json(SuggestResponse {
        seq: query.seq,
        query: query.q,
        suggestions,
    }))
}

async fn search_professionals(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ProfessionalFilter>,
) -> ApiResult<Json<Vec<Professional>>> {
    debug!(
        "Searching professionals (q={:?}, category={:?})...",
        filter.q, filter.category
    );
    let professionals = state.profession_service.search_professionals(filter).await?;
    Ok(Json(professionals))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(get_catalog))
        .route("/professions/suggest", get(suggest_professions))
        .route("/professionals", get(search_professionals))
}
