//! Mail service - composes the dashboard's outbound messages

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::state::MailServiceTrait;
use crate::domain::user::User;
use crate::domain::{DomainError, Mailer};

/// Mail service over an injected transport
#[derive(Debug)]
pub struct MailService {
    mailer: Arc<dyn Mailer>,
}

impl MailService {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl MailServiceTrait for MailService {
    async fn send_welcome(&self, user: &User) -> Result<(), DomainError> {
        let body = format!(
            "Hi {},\n\nYour account has been created. Welcome to the dashboard!",
            user.name()
        );
        self.mailer.send(user.email(), "Welcome!", &body).await
    }

    async fn send_notification(
        &self,
        user: &User,
        subject: &str,
        message: &str,
    ) -> Result<(), DomainError> {
        self.mailer.send(user.email(), subject, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mailer::mock::RecordingMailer;
    use crate::domain::user::UserId;
    use chrono::Utc;

    fn test_user() -> User {
        User::new(
            UserId::generate(),
            "Jane Smith",
            "jane@example.com",
            "Los Angeles",
            "CA",
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_welcome_addresses_the_user() {
        let mailer = Arc::new(RecordingMailer::new());
        let service = MailService::new(mailer.clone());

        service.send_welcome(&test_user()).await.unwrap();

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "jane@example.com");
        assert_eq!(sent[0].subject, "Welcome!");
        assert!(sent[0].body.contains("Jane Smith"));
    }

    #[tokio::test]
    async fn test_notification_passes_subject_and_message_through() {
        let mailer = Arc::new(RecordingMailer::new());
        let service = MailService::new(mailer.clone());

        service
            .send_notification(&test_user(), "Maintenance", "Downtime at noon")
            .await
            .unwrap();

        let sent = mailer.sent().await;
        assert_eq!(sent[0].subject, "Maintenance");
        assert_eq!(sent[0].body, "Downtime at noon");
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let mailer = Arc::new(RecordingMailer::new());
        mailer.set_should_fail(true);
        let service = MailService::new(mailer);

        let result = service.send_welcome(&test_user()).await;
        assert!(matches!(result, Err(DomainError::Dispatch { .. })));
    }
}
