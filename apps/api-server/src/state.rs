//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::ports::PostRepository;
use posts_infra::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use posts_infra::{DatabaseConfig, PostgresPostRepository};

use crate::config::DbSettings;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    /// Name of the active storage backend, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub async fn new(db_settings: Option<&DbSettings>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_settings {
            Some(settings) => match PostgresPostRepository::connect(&database_config(settings)).await {
                Ok(repo) => Self::with_repository(Arc::new(repo), "postgres"),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_settings.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!(storage = state.storage, "Application state initialized");
        state
    }

    /// State over an explicit repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>, storage: &'static str) -> Self {
        Self { posts, storage }
    }

    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), "memory")
    }
}

#[cfg(feature = "postgres")]
fn database_config(settings: &DbSettings) -> DatabaseConfig {
    DatabaseConfig {
        url: settings.url.clone(),
        max_connections: settings.max_connections,
        min_connections: settings.min_connections,
    }
}
