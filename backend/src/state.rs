use std::sync::Arc;

use crate::{
    config::Config,
    db::connection::create_lazy_pool,
    repositories::{SchemeRepository, SchemeRepositoryTrait},
};

/// Shared state handed to the guard middleware.
#[derive(Clone)]
pub struct AppState {
    pub schemes: Arc<dyn SchemeRepositoryTrait>,
}

impl AppState {
    pub fn new(schemes: Arc<dyn SchemeRepositoryTrait>) -> Self {
        Self { schemes }
    }

    /// Builds a PostgreSQL-backed state from configuration. Connections are
    /// opened on first use.
    pub fn connect(config: &Config) -> anyhow::Result<Self> {
        let pool = create_lazy_pool(&config.database_url, config.pool_config())?;
        tracing::info!(
            max_connections = config.database_max_connections,
            "Configured scheme store pool"
        );
        Ok(Self::new(Arc::new(SchemeRepository::new(pool))))
    }
}
