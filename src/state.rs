use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::games::catalog::{CatalogCache, CatalogSource, HttpCatalogSource};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub catalog: Arc<CatalogCache>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(config.database.connect_options())
            .await
            .context("connect to database")?;

        let source = Arc::new(HttpCatalogSource::new(config.catalog.base_url.clone()))
            as Arc<dyn CatalogSource>;
        let catalog = Arc::new(CatalogCache::new(
            source,
            Duration::from_secs(config.catalog.refresh_ttl_secs),
        ));

        Ok(Self { db, catalog })
    }
}
