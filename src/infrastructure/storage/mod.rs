//! Storage infrastructure - backend selection and schema setup

pub mod migrations;

pub use migrations::PostgresMigrator;

/// Available record-store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local store; state is lost on shutdown
    InMemory,
    /// PostgreSQL via `DATABASE_URL`
    Postgres,
}

impl StorageBackend {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "memory" | "in_memory" | "in-memory" => Some(Self::InMemory),
            "postgres" | "postgresql" => Some(Self::Postgres),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!(StorageBackend::from_str("memory"), Some(StorageBackend::InMemory));
        assert_eq!(StorageBackend::from_str("in-memory"), Some(StorageBackend::InMemory));
        assert_eq!(StorageBackend::from_str("Postgres"), Some(StorageBackend::Postgres));
        assert_eq!(StorageBackend::from_str("postgresql"), Some(StorageBackend::Postgres));
        assert_eq!(StorageBackend::from_str("mongo"), None);
    }
}
