use std::sync::Arc;

use async_trait::async_trait;

use business::domain::email::errors::EmailError;
use business::domain::email::model::EmailEnvelope;
use business::domain::email::services::MailSender;
use business::domain::logger::Logger;

/// Sender that only logs the message. Nothing leaves the process.
pub struct NoOpMailSender {
    logger: Arc<dyn Logger>,
}

impl NoOpMailSender {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

#[async_trait]
impl MailSender for NoOpMailSender {
    async fn send(&self, envelope: &EmailEnvelope) -> Result<(), EmailError> {
        self.logger.info(&format!(
            "Mock email sent: {} to {}",
            envelope.subject, envelope.to
        ));
        self.logger
            .debug(&format!("Email content: {}", envelope.html_body));
        Ok(())
    }
}
