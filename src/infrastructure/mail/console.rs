//! Console mail transport
//!
//! Logs every send instead of delivering it. This is the only transport
//! the dashboard ships with; real delivery lives behind the same
//! [`Mailer`] trait.

use async_trait::async_trait;
use tracing::info;

use crate::domain::{DomainError, Mailer};

/// Mailer that writes messages to the log
#[derive(Debug, Default)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DomainError> {
        info!(to = %to, subject = %subject, body = %body, "Sending email");
        Ok(())
    }
}
