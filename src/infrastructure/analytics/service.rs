//! Analytics service - snapshots over the record store

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::api::state::AnalyticsServiceTrait;
use crate::domain::analytics::{aggregate, AnalyticsSnapshot};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;

/// Computes analytics snapshots from a full scan of the user set.
///
/// The scan-then-group strategy matches the dataset this dashboard
/// serves; a store-side aggregation could replace it behind the same
/// trait without touching callers.
#[derive(Debug)]
pub struct AnalyticsService {
    repository: Arc<dyn UserRepository>,
}

impl AnalyticsService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Snapshot with the growth window pinned to a specific end date.
    ///
    /// This is the deterministic entry point: same store contents plus
    /// same `today` always yields the same snapshot.
    pub async fn snapshot_at(&self, today: NaiveDate) -> Result<AnalyticsSnapshot, DomainError> {
        let users = self.repository.list().await?;
        Ok(aggregate(&users, today))
    }
}

#[async_trait]
impl AnalyticsServiceTrait for AnalyticsService {
    async fn snapshot(&self) -> Result<AnalyticsSnapshot, DomainError> {
        self.snapshot_at(Utc::now().date_naive()).await
    }
}
