//! Outbound mail boundary
//!
//! The core never depends on transport details; it hands a recipient,
//! subject, and body to whatever `Mailer` was injected at startup and
//! treats failure as a distinguishable outcome.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for sending a single email
#[async_trait]
pub trait Mailer: Send + Sync + Debug {
    /// Send one message; failures surface as `DomainError::Dispatch`
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// One captured outbound message
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SentMail {
        pub to: String,
        pub subject: String,
        pub body: String,
    }

    /// Mailer double that records sends and can be told to fail
    #[derive(Debug, Default)]
    pub struct RecordingMailer {
        sent: Arc<Mutex<Vec<SentMail>>>,
        should_fail: Arc<AtomicBool>,
    }

    impl RecordingMailer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_should_fail(&self, fail: bool) {
            self.should_fail.store(fail, Ordering::SeqCst);
        }

        pub async fn sent(&self) -> Vec<SentMail> {
            self.sent.lock().await.clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DomainError> {
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(DomainError::dispatch("Mailer configured to fail"));
            }

            self.sent.lock().await.push(SentMail {
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_recording_mailer_captures_sends() {
            let mailer = RecordingMailer::new();

            mailer.send("a@x.com", "Hi", "Body").await.unwrap();

            let sent = mailer.sent().await;
            assert_eq!(sent.len(), 1);
            assert_eq!(sent[0].to, "a@x.com");
        }

        #[tokio::test]
        async fn test_recording_mailer_can_fail() {
            let mailer = RecordingMailer::new();
            mailer.set_should_fail(true);

            let result = mailer.send("a@x.com", "Hi", "Body").await;
            assert!(matches!(result, Err(DomainError::Dispatch { .. })));
            assert!(mailer.sent().await.is_empty());
        }
    }
}
