//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User identifier - a store-assigned UUID, exposed as a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its string form
    ///
    /// A string that is not a well-formed UUID is a malformed reference,
    /// which callers report separately from a missing record.
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned by the store
    id: UserId,
    /// Display name
    name: String,
    /// Email address, globally unique
    email: String,
    /// City of residence
    city: String,
    /// State, free-form ("CA" or "California")
    state: String,
    /// Creation timestamp, set once and never mutated
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            city: city.into(),
            state: state.into(),
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The domain part of the email, if the address is well-formed enough
    /// to have one: exactly one `@` with a non-empty remainder.
    ///
    /// Records with anything else (no `@`, several, or nothing after it)
    /// yield `None`; analytics skips them rather than erroring.
    pub fn email_domain(&self) -> Option<&str> {
        let mut parts = self.email.splitn(3, '@');
        let _local = parts.next()?;
        let domain = parts.next()?;
        if parts.next().is_some() || domain.is_empty() {
            return None;
        }
        Some(domain)
    }

    // Mutators - `created_at` and `id` stay fixed for the record's lifetime

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }
}
