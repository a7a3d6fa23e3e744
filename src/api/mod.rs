//! API layer - axum router, handlers, and shared state

pub mod analytics;
pub mod health;
pub mod router;
pub mod state;
pub mod types;
pub mod users;

pub use router::create_router;
pub use state::AppState;
