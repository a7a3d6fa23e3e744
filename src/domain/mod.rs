//! Domain layer - core entities, validation, and aggregation logic

pub mod analytics;
pub mod error;
pub mod mailer;
pub mod user;

pub use analytics::{AnalyticsSnapshot, BucketCount};
pub use error::DomainError;
pub use mailer::Mailer;
pub use user::{NewUser, User, UserChanges, UserId, UserRepository};
