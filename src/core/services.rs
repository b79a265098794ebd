//! Unified service container for librank
//!
//! Provides shared access to all core services.

use crate::core::catalog::CatalogService;
use crate::core::config::Config;
use crate::core::index::TermFrequencySource;
use crate::core::ranking::RankingService;
use chrono::{Datelike, Utc};
use std::sync::Arc;

/// Unified services container
///
/// Built once at startup and shared as axum state. Ranking requests
/// are pure computations over their inputs, so the container needs
/// no interior locking.
#[derive(Clone)]
pub struct Services {
    /// Catalog search collaborator (candidate retrieval)
    pub catalog: Arc<CatalogService>,

    /// Relevance ranking engine
    pub ranking: Arc<RankingService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(CatalogService::new(&config.catalog.data_dir));

        let current_year = config
            .ranking
            .current_year
            .unwrap_or_else(|| Utc::now().year());
        let ranking = Arc::new(RankingService::new(
            TermFrequencySource::new(&config.catalog.data_dir),
            config.ranking.clone(),
            current_year,
        ));

        Self {
            catalog,
            ranking,
            config: Arc::new(config),
        }
    }
}
