//! Application state for shared services

use std::sync::Arc;

use crate::domain::analytics::AnalyticsSnapshot;
use crate::domain::user::User;
use crate::domain::DomainError;
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub mail_service: Arc<dyn MailServiceTrait>,
}

/// Trait for user CRUD operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// All users, newest first
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    /// Look up one user; `Err(InvalidId)` for a malformed id
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;
    /// Validate and persist a new user
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    /// Validate and apply the supplied fields
    async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError>;
    /// Remove a user; `false` when the id does not exist
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;
}

/// Trait for analytics snapshots
#[async_trait::async_trait]
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Compute the four-part summary for the current user set
    async fn snapshot(&self) -> Result<AnalyticsSnapshot, DomainError>;
}

/// Trait for outbound mail composition
#[async_trait::async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Welcome message for a freshly created user
    async fn send_welcome(&self, user: &User) -> Result<(), DomainError>;
    /// Ad-hoc notification with a caller-supplied subject and message
    async fn send_notification(
        &self,
        user: &User,
        subject: &str,
        message: &str,
    ) -> Result<(), DomainError>;
}
