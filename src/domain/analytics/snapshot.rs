//! Derived analytics types

use serde::{Deserialize, Serialize};

/// One grouping bucket: a key and how many users fell into it.
///
/// For the regional and domain summaries the key is a lowercased group
/// value; for the growth series it is an ISO `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCount {
    pub key: String,
    pub count: u64,
}

impl BucketCount {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// The four-part summary computed fresh from the current user set.
///
/// Not an entity - it has no identity and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    /// Top states by user count
    pub by_state: Vec<BucketCount>,
    /// Top cities by user count
    pub by_city: Vec<BucketCount>,
    /// Top email domains by user count
    pub by_domain: Vec<BucketCount>,
    /// Signups per day over the trailing 7-day window, zero-filled
    pub growth: Vec<BucketCount>,
}
