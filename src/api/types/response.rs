//! Success-response envelope
//!
//! Every response the API produces carries a `success` flag; successes
//! wrap their payload in `data`, and list responses add a `count`.
//! Failures use [`super::error::ApiError`].

use serde::Serialize;

/// Standard success envelope
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data,
        }
    }

    pub fn with_count(data: T, count: usize) -> Self {
        Self {
            success: true,
            count: Some(count),
            data,
        }
    }
}

/// Success envelope for operations that report a message instead of data
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
