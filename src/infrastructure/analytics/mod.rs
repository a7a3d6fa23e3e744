//! Analytics infrastructure

mod service;

pub use service::AnalyticsService;
