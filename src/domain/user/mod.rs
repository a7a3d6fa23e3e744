//! User domain
//!
//! Domain types for the managed user record: the entity itself, payload
//! validation, and the repository trait the stores implement.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::{NewUser, UserChanges, UserRepository};
pub use validation::{
    validate_city, validate_email, validate_name, validate_state, UserValidationError,
};
