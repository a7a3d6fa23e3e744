//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Data for a new user record. Callers validate and trim before handing
/// it to the store; the store assigns the id and creation timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub city: String,
    pub state: String,
}

/// Field changes for an update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.city.is_none() && self.state.is_none()
    }
}

/// Repository trait for user storage
///
/// Email uniqueness is the store's responsibility and must hold under
/// concurrent writes - two racing creates with one email may not both
/// succeed.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// All users, newest first by creation time
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Get a user by id
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Persist a new user; fails with `DuplicateEmail` if the email is taken
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// Apply the supplied field changes; `None` when the id does not exist
    async fn update(&self, id: &UserId, changes: UserChanges)
        -> Result<Option<User>, DomainError>;

    /// Delete a user; `false` when the id does not exist
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}
