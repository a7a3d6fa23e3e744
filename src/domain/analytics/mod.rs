//! Analytics domain
//!
//! Derives the dashboard summaries (regional counts, email-domain
//! distribution, 7-day signup growth) from the current user set. Nothing
//! here is persisted; every snapshot is recomputed from scratch.

mod aggregator;
mod snapshot;

pub use aggregator::{aggregate, GROWTH_WINDOW_DAYS, TOP_GROUPS};
pub use snapshot::{AnalyticsSnapshot, BucketCount};
