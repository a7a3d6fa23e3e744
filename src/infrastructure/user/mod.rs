//! User infrastructure - repository implementations and the user service

mod in_memory_repository;
mod postgres_repository;
mod service;

pub use in_memory_repository::InMemoryUserRepository;
pub use postgres_repository::PostgresUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
