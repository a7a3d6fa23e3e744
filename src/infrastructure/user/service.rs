//! User service - validation and CRUD orchestration over the repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::state::UserServiceTrait;
use crate::domain::user::{
    validate_city, validate_email, validate_name, validate_state, NewUser, User, UserChanges,
    UserId, UserRepository, UserValidationError,
};
use crate::domain::DomainError;

/// Request for creating a new user
///
/// Fields are optional so a missing field reports "x is required" through
/// the validation path instead of failing JSON deserialization.
#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Request for updating a user; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// User service wrapping a repository
#[derive(Debug)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    fn parse_id(id: &str) -> Result<UserId, DomainError> {
        UserId::parse(id).map_err(|_| DomainError::invalid_id("Invalid user ID"))
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user_id = Self::parse_id(id)?;
        self.repository.get(&user_id).await
    }

    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let mut failures = Vec::new();

        let name = request.name.as_deref().unwrap_or("");
        let email = request.email.as_deref().unwrap_or("");
        let city = request.city.as_deref().unwrap_or("");
        let state = request.state.as_deref().unwrap_or("");

        collect(&mut failures, validate_name(name));
        collect(&mut failures, validate_email(email));
        collect(&mut failures, validate_city(city));
        collect(&mut failures, validate_state(state));

        if let Some(message) = joined(&failures) {
            return Err(DomainError::validation(message));
        }

        // the validation chain sanitizes: stored values are trimmed
        self.repository
            .create(NewUser {
                name: name.trim().to_string(),
                email: email.to_string(),
                city: city.trim().to_string(),
                state: state.trim().to_string(),
            })
            .await
    }

    async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError> {
        let user_id = Self::parse_id(id)?;

        let mut failures = Vec::new();
        if let Some(name) = &request.name {
            collect(&mut failures, validate_name(name));
        }
        if let Some(email) = &request.email {
            collect(&mut failures, validate_email(email));
        }
        if let Some(city) = &request.city {
            collect(&mut failures, validate_city(city));
        }
        if let Some(state) = &request.state {
            collect(&mut failures, validate_state(state));
        }

        if let Some(message) = joined(&failures) {
            return Err(DomainError::validation(message));
        }

        let changes = UserChanges {
            name: request.name.map(|v| v.trim().to_string()),
            email: request.email,
            city: request.city.map(|v| v.trim().to_string()),
            state: request.state.map(|v| v.trim().to_string()),
        };

        self.repository
            .update(&user_id, changes)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let user_id = Self::parse_id(id)?;
        self.repository.delete(&user_id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

fn collect(failures: &mut Vec<UserValidationError>, result: Result<(), UserValidationError>) {
    if let Err(failure) = result {
        failures.push(failure);
    }
}

fn joined(failures: &[UserValidationError]) -> Option<String> {
    if failures.is_empty() {
        return None;
    }
    Some(
        failures
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn full_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: Some("Test User".to_string()),
            email: Some(email.to_string()),
            city: Some("New York".to_string()),
            state: Some("NY".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_valid_user() {
        let service = service();

        let user = service.create(full_request("a@x.com")).await.unwrap();
        assert_eq!(user.email(), "a@x.com");
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_missing_everything_joins_all_messages() {
        let service = service();

        let err = service.create(CreateUserRequest::default()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Name is required, Valid email is required, City is required, State is required"
        );
    }

    #[tokio::test]
    async fn test_create_single_failure_single_message() {
        let service = service();

        let mut request = full_request("a@x.com");
        request.email = Some("not-an-email".to_string());

        let err = service.create(request).await.unwrap_err();
        assert_eq!(err.to_string(), "Valid email is required");
    }

    #[tokio::test]
    async fn test_failed_create_persists_nothing() {
        let service = service();

        let mut request = full_request("a@x.com");
        request.name = Some("   ".to_string());

        assert!(service.create(request).await.is_err());
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_trims_stored_values() {
        let service = service();

        let request = CreateUserRequest {
            name: Some("  Test User  ".to_string()),
            email: Some("a@x.com".to_string()),
            city: Some(" New York".to_string()),
            state: Some(" NY".to_string()),
        };

        let user = service.create(request).await.unwrap();
        assert_eq!(user.name(), "Test User");
        assert_eq!(user.city(), "New York");
        assert_eq!(user.state(), "NY");
    }

    #[tokio::test]
    async fn test_get_with_malformed_id() {
        let service = service();

        let err = service.get("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidId { .. }));
        assert_eq!(err.to_string(), "Invalid user ID");
    }

    #[tokio::test]
    async fn test_get_missing_user_is_none() {
        let service = service();

        let id = UserId::generate().to_string();
        assert!(service.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_validates_only_supplied_fields() {
        let service = service();
        let user = service.create(full_request("a@x.com")).await.unwrap();

        // partial update with no email at all is fine
        let updated = service
            .update(
                &user.id().to_string(),
                UpdateUserRequest {
                    city: Some("Austin".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.city(), "Austin");

        // but a supplied field must pass its rule
        let err = service
            .update(
                &user.id().to_string(),
                UpdateUserRequest {
                    email: Some("nope".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Valid email is required");
    }

    #[tokio::test]
    async fn test_update_missing_user_not_found() {
        let service = service();

        let err = service
            .update(&UserId::generate().to_string(), UpdateUserRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn test_update_empty_payload_returns_current_record() {
        let service = service();
        let user = service.create(full_request("a@x.com")).await.unwrap();

        let updated = service
            .update(&user.id().to_string(), UpdateUserRequest::default())
            .await
            .unwrap();
        assert_eq!(updated, user);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let service = service();
        let user = service.create(full_request("a@x.com")).await.unwrap();
        let id = user.id().to_string();

        assert!(service.delete(&id).await.unwrap());
        assert!(service.get(&id).await.unwrap().is_none());
    }
}
