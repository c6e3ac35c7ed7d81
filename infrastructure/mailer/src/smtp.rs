use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use business::domain::email::errors::EmailError;
use business::domain::email::model::EmailEnvelope;
use business::domain::email::services::MailSender;

/// Connection settings for the outgoing SMTP relay.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub server: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: String,
    pub timeout: Duration,
}

/// Delivers mail through an SMTP relay.
///
/// Uses STARTTLS with authentication when a username is configured,
/// a plain unauthenticated connection otherwise.
pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailSender {
    pub fn new(settings: &SmtpSettings) -> Result<Self, EmailError> {
        let builder = match &settings.username {
            Some(username) => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)
                .map_err(|e| EmailError::DeliveryFailed(e.to_string()))?
                .credentials(Credentials::new(username.clone(), settings.password.clone())),
            None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(settings.server.as_str()),
        };

        let transport = builder
            .port(settings.port)
            .timeout(Some(settings.timeout))
            .build();

        Ok(Self { transport })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| EmailError::InvalidAddress(format!("{}: {}", address, e)))
}

/// Builds the MIME message for an envelope. Body is sent as `text/html`.
pub fn build_message(envelope: &EmailEnvelope) -> Result<Message, EmailError> {
    Message::builder()
        .from(parse_mailbox(&envelope.from)?)
        .to(parse_mailbox(&envelope.to)?)
        .subject(envelope.subject.clone())
        .header(ContentType::TEXT_HTML)
        .body(envelope.html_body.clone())
        .map_err(|e| EmailError::DeliveryFailed(e.to_string()))
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, envelope: &EmailEnvelope) -> Result<(), EmailError> {
        let message = build_message(envelope)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| EmailError::DeliveryFailed(e.to_string()))?;
        Ok(())
    }
}
