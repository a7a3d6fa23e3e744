//! Database schema setup

use sqlx::postgres::PgPool;

use crate::domain::DomainError;

/// Creates the schema the repositories expect.
///
/// The `UNIQUE` constraint on `email` is load-bearing: it is what makes
/// concurrent duplicate inserts lose at the store instead of racing an
/// application-level check.
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs all pending schema changes
    pub async fn run(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create users table: {}", e)))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS users_created_at_idx ON users (created_at DESC)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create index: {}", e)))?;

        Ok(())
    }
}
