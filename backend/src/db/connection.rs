use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

fn pool_options(config: PoolConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}

/// Connects eagerly, failing if the database cannot be reached.
pub async fn create_pool(database_url: &str, config: PoolConfig) -> anyhow::Result<PgPool> {
    let pool = pool_options(config).connect(database_url).await?;
    Ok(pool)
}

/// Builds a pool that opens connections on first use.
pub fn create_lazy_pool(database_url: &str, config: PoolConfig) -> anyhow::Result<PgPool> {
    let pool = pool_options(config).connect_lazy(database_url)?;
    Ok(pool)
}
