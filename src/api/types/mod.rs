//! Shared API types - envelope, errors, extractors

mod error;
mod json;
mod response;

pub use error::{ApiError, ApiErrorBody};
pub use json::Json;
pub use response::{ApiResponse, MessageResponse};
