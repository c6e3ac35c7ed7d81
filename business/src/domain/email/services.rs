use async_trait::async_trait;

use super::errors::EmailError;
use super::model::{EmailEnvelope, OrderResult};

/// Service port turning an order into the HTML body of the confirmation email.
pub trait MailRenderer: Send + Sync {
    fn render(&self, order: &OrderResult) -> Result<String, EmailError>;
}

/// Service port delivering a rendered email.
///
/// Implementations may block their caller for the duration of the network
/// exchange. No retry is expected from callers.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, envelope: &EmailEnvelope) -> Result<(), EmailError>;
}
