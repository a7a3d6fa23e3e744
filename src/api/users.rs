//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResponse, Json, MessageResponse};
use crate::domain::user::User;
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Request to create a new user
///
/// Every field is optional at the wire level; presence is a validation
/// rule, not a parsing rule, so a missing name answers "Name is
/// required" rather than a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Request to update a user; omitted fields are left untouched
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Request to send a user an ad-hoc notification
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyBody {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// User representation returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub created_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            city: user.city().to_string(),
            state: user.state().to_string(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await?;

    let data: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    let count = data.len();

    Ok(Json(ApiResponse::with_count(data, count)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    debug!(id = %id, "Getting user");

    let user = state
        .user_service
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ApiResponse::new(UserResponse::from(&user))))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    debug!(email = ?body.email, "Creating user");

    let request = CreateUserRequest {
        name: body.name,
        email: body.email,
        city: body.city,
        state: body.state,
    };

    let user = state.user_service.create(request).await?;

    // Best-effort welcome email. The create already committed, so the
    // outcome is logged and never surfaced to the caller, and the
    // response does not wait for it.
    let mail_service = state.mail_service.clone();
    let welcome_user = user.clone();
    tokio::spawn(async move {
        if let Err(err) = mail_service.send_welcome(&welcome_user).await {
            warn!(email = %welcome_user.email(), error = %err, "Welcome email failed to send");
        }
    });

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(UserResponse::from(&user))),
    ))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    debug!(id = %id, "Updating user");

    let request = UpdateUserRequest {
        name: body.name,
        email: body.email,
        city: body.city,
        state: body.state,
    };

    let user = state.user_service.update(&id, request).await?;

    Ok(Json(ApiResponse::new(UserResponse::from(&user))))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    debug!(id = %id, "Deleting user");

    let deleted = state.user_service.delete(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("User not found"));
    }

    Ok(Json(ApiResponse::new(serde_json::json!({}))))
}

/// POST /api/users/{id}/notify
pub async fn notify_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<NotifyBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(id = %id, "Sending notification");

    let subject = body.subject.as_deref().unwrap_or("").trim();
    let message = body.message.as_deref().unwrap_or("").trim();
    if subject.is_empty() || message.is_empty() {
        return Err(ApiError::bad_request("Subject and message are required"));
    }

    let user = state
        .user_service
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    // unlike the welcome path, a dispatch failure here is the caller's
    // business and surfaces as an error
    state
        .mail_service
        .send_notification(&user, subject, message)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Notification sent to {}",
        user.email()
    ))))
}
