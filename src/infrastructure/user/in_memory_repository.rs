//! In-memory user repository implementation
//!
//! Backs the default `memory` storage backend and the test suites. The
//! whole collection lives behind one `RwLock`; uniqueness checks happen
//! inside the write-lock critical section, so two racing creates with
//! the same email cannot both succeed.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserChanges, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given users
    ///
    /// Records are stored as given: ids, timestamps, and even emails the
    /// validation layer would reject pass through untouched. Useful for
    /// fixtures.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;

        let mut result = users.clone();
        // stable: records created at the same instant keep insertion order
        result.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(result)
    }

    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email() == new_user.email) {
            return Err(DomainError::duplicate_email("Email already exists"));
        }

        let user = User::new(
            UserId::generate(),
            new_user.name,
            new_user.email,
            new_user.city,
            new_user.state,
            Utc::now(),
        );

        users.push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: &UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;

        if let Some(email) = &changes.email {
            if users.iter().any(|u| u.email() == email && u.id() != id) {
                return Err(DomainError::duplicate_email("Email already exists"));
            }
        }

        let Some(user) = users.iter_mut().find(|u| u.id() == id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            user.set_name(name);
        }
        if let Some(email) = changes.email {
            user.set_email(email);
        }
        if let Some(city) = changes.city {
            user.set_city(city);
        }
        if let Some(state) = changes.state {
            user.set_state(state);
        }

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id() != id);
        Ok(users.len() < before)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.read().await.len())
    }
}
