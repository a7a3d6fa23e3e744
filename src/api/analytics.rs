//! Analytics endpoints

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResponse, Json};
use crate::domain::analytics::AnalyticsSnapshot;

/// GET /api/analytics/regions
///
/// Recomputes the snapshot from the current user set on every call.
pub async fn region_analytics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AnalyticsSnapshot>>, ApiError> {
    debug!("Computing regional analytics");

    let snapshot = state.analytics_service.snapshot().await?;

    Ok(Json(ApiResponse::new(snapshot)))
}
