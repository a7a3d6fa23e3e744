//! User Dashboard API
//!
//! A small administrative service for managing user records with:
//! - CRUD over a single user collection (in-memory or PostgreSQL)
//! - Regional, email-domain, and signup-growth analytics
//! - Best-effort welcome emails and explicit notifications

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::user::UserRepository;
use domain::Mailer;
use infrastructure::analytics::AnalyticsService;
use infrastructure::mail::{ConsoleMailer, MailService};
use infrastructure::storage::{PostgresMigrator, StorageBackend};
use infrastructure::user::{InMemoryUserRepository, PostgresUserRepository, UserService};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let backend = StorageBackend::from_str(&config.storage.backend)
        .unwrap_or(StorageBackend::InMemory);
    info!("Storage backend: {:?}", backend);

    let repository: Arc<dyn UserRepository> = match backend {
        StorageBackend::Postgres => {
            let database_url = std::env::var("DATABASE_URL").map_err(|_| {
                anyhow::anyhow!("DATABASE_URL environment variable is required")
            })?;

            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(&database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            PostgresMigrator::new(pool.clone()).run().await?;

            Arc::new(PostgresUserRepository::new(pool))
        }
        StorageBackend::InMemory => Arc::new(InMemoryUserRepository::new()),
    };

    // transport resolved once, injected everywhere it is needed
    let mailer: Arc<dyn Mailer> = Arc::new(ConsoleMailer::new());

    Ok(AppState {
        user_service: Arc::new(UserService::new(repository.clone())),
        analytics_service: Arc::new(AnalyticsService::new(repository)),
        mail_service: Arc::new(MailService::new(mailer)),
    })
}
