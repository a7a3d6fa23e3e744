//! PostgreSQL user repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::user::{NewUser, User, UserChanges, UserId, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
///
/// Email uniqueness rides on the `users_email_key` constraint, so the
/// database arbitrates concurrent inserts rather than an application
/// check-then-insert.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, city, state, created_at
            FROM users
            ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, city, state, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let user = User::new(
            UserId::generate(),
            new_user.name,
            new_user.email,
            new_user.city,
            new_user.state,
            Utc::now(),
        );

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, city, state, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.name())
        .bind(user.email())
        .bind(user.city())
        .bind(user.state())
        .bind(user.created_at())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(user)
    }

    async fn update(
        &self,
        id: &UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET name  = COALESCE($2, name),
                email = COALESCE($3, email),
                city  = COALESCE($4, city),
                state = COALESCE($5, state)
            WHERE id = $1
            RETURNING id, name, email, city, state, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(changes.name)
        .bind(changes.email)
        .bind(changes.city)
        .bind(changes.state)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count users: {}", e)))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| DomainError::storage(format!("Failed to read count: {}", e)))?;
        Ok(count as usize)
    }
}

fn map_write_error(e: sqlx::Error) -> DomainError {
    let msg = e.to_string();

    if msg.contains("duplicate key") || msg.contains("unique constraint") {
        DomainError::duplicate_email("Email already exists")
    } else {
        DomainError::storage(format!("Failed to write user: {}", e))
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: Uuid = try_column(row, "id")?;
    let name: String = try_column(row, "name")?;
    let email: String = try_column(row, "email")?;
    let city: String = try_column(row, "city")?;
    let state: String = try_column(row, "state")?;
    let created_at: DateTime<Utc> = try_column(row, "created_at")?;

    Ok(User::new(
        UserId::from(id),
        name,
        email,
        city,
        state,
        created_at,
    ))
}

fn try_column<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::storage(format!("Failed to read column '{}': {}", column, e)))
}
