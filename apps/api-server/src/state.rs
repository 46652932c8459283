//! Application state - shared across all handlers.

use std::sync::Arc;

use journal_core::EntryService;
use journal_core::ports::EntryRepository;
use journal_infra::InMemoryEntryRepository;

#[cfg(feature = "postgres")]
use journal_infra::{DatabaseConfig, PostgresEntryRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub entries: EntryService,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let repository: Arc<dyn EntryRepository> = match &config.database_url {
            Some(url) => {
                let db_config = DatabaseConfig {
                    url: url.clone(),
                    max_connections: config.db_max_connections,
                    min_connections: config.db_min_connections,
                };
                match journal_infra::connect(&db_config).await {
                    Ok(conn) => Arc::new(PostgresEntryRepository::new(conn)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryEntryRepository::new())
                    }
                }
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryEntryRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repository: Arc<dyn EntryRepository> = {
            if config.database_url.is_some() {
                tracing::warn!(
                    "DATABASE_URL is set but the postgres feature is disabled - using in-memory repository"
                );
            }
            Arc::new(InMemoryEntryRepository::new())
        };

        tracing::info!("Application state initialized");

        Self {
            entries: EntryService::new(repository),
        }
    }
}
