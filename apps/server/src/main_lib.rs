use std::sync::Arc;

use crate::config::Config;
use proreview_backend::{BackendClient, BackendProfessionRepository};
use proreview_core::professions::{ProfessionService, ProfessionServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub profession_service: Arc<dyn ProfessionServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = BackendClient::new(&config.backend_url, &config.backend_key)?;
    tracing::info!("Backend in use: {}", client.base_url());

    let profession_repository = Arc::new(BackendProfessionRepository::new(client));
    let profession_service = Arc::new(ProfessionService::new(profession_repository));

    Ok(Arc::new(AppState { profession_service }))
}
