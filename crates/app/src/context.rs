//! App Context

use std::{sync::Arc, time::Duration};

use clap::Args;
use reqwest::Url;
use thiserror::Error;

use crate::{
    carts::{CartsService, InMemoryCartsService},
    catalog::{
        CatalogError, CatalogService, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, OpenFoodFactsCatalog,
        OpenFoodFactsConfig, SampleCatalog,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build catalog client")]
    Catalog(#[source] CatalogError),
}

/// Which catalog backs the application.
#[derive(Debug, Clone)]
pub enum CatalogConfig {
    /// Proxy an OpenFoodFacts instance.
    OpenFoodFacts(OpenFoodFactsConfig),

    /// Serve the bundled sample products.
    Offline,
}

/// Catalog connection settings, read from flags or the environment.
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// OpenFoodFacts base URL
    #[arg(long, env = "CATALOG_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub catalog_base_url: Url,

    /// User agent sent to OpenFoodFacts
    #[arg(long, env = "CATALOG_USER_AGENT", default_value = DEFAULT_USER_AGENT, global = true)]
    pub catalog_user_agent: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "CATALOG_TIMEOUT_SECONDS", default_value_t = 10_u64, global = true)]
    pub catalog_timeout_seconds: u64,

    /// Serve the bundled sample products instead of proxying OpenFoodFacts
    #[arg(
        long,
        visible_alias = "offline",
        env = "CATALOG_OFFLINE",
        default_value_t = false,
        global = true
    )]
    pub catalog_offline: bool,
}

impl CatalogArgs {
    /// The catalog configuration these arguments describe.
    #[must_use]
    pub fn catalog_config(&self) -> CatalogConfig {
        if self.catalog_offline {
            return CatalogConfig::Offline;
        }

        CatalogConfig::OpenFoodFacts(OpenFoodFactsConfig {
            base_url: self.catalog_base_url.clone(),
            user_agent: self.catalog_user_agent.clone(),
            timeout: Duration::from_secs(self.catalog_timeout_seconds),
        })
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context for the configured catalog, with empty in-memory carts.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client for the catalog cannot be built.
    pub fn from_catalog_config(config: CatalogConfig) -> Result<Self, AppInitError> {
        let catalog: Arc<dyn CatalogService> = match config {
            CatalogConfig::OpenFoodFacts(config) => Arc::new(
                OpenFoodFactsCatalog::new(config).map_err(AppInitError::Catalog)?,
            ),
            CatalogConfig::Offline => Arc::new(SampleCatalog::new()),
        };

        Ok(Self {
            catalog,
            carts: Arc::new(InMemoryCartsService::new()),
        })
    }
}
