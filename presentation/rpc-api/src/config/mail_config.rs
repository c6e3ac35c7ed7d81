use std::time::Duration;

use anyhow::{Context, bail};
use mailer::SmtpSettings;

use super::{Lookup, env_lookup};

/// Which `MailSender` implementation the email service wires in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailSenderKind {
    NoOp,
    Smtp,
}

/// Configuration for the order confirmation mail path.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub sender: MailSenderKind,
    pub from_email: String,
    pub smtp: SmtpSettings,
}

impl MailConfig {
    /// Load mail configuration from environment variables
    ///
    /// Environment variables:
    /// - MAIL_SENDER: "noop" or "smtp" (default: "noop")
    /// - SMTP_SERVER: relay host (default: "localhost")
    /// - SMTP_PORT: relay port (default: 587)
    /// - SMTP_USERNAME / SMTP_PASSWORD: enable STARTTLS and authentication when set
    /// - FROM_EMAIL: sender address (default: "noreply@onlineboutique.com")
    /// - SMTP_TIMEOUT_SECS: connection timeout in seconds (default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> anyhow::Result<Self> {
        let sender = match lookup("MAIL_SENDER")
            .unwrap_or_else(|| "noop".to_string())
            .to_lowercase()
            .as_str()
        {
            "noop" => MailSenderKind::NoOp,
            "smtp" => MailSenderKind::Smtp,
            other => bail!("MAIL_SENDER must be \"noop\" or \"smtp\", got {:?}", other),
        };

        let port = match lookup("SMTP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("SMTP_PORT must be a valid port number, got {:?}", raw))?,
            None => 587,
        };

        let timeout_secs = match lookup("SMTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("SMTP_TIMEOUT_SECS must be an integer, got {:?}", raw))?,
            None => 10,
        };

        let username = lookup("SMTP_USERNAME").filter(|u| !u.is_empty());

        Ok(Self {
            sender,
            from_email: lookup("FROM_EMAIL")
                .unwrap_or_else(|| "noreply@onlineboutique.com".to_string()),
            smtp: SmtpSettings {
                server: lookup("SMTP_SERVER").unwrap_or_else(|| "localhost".to_string()),
                port,
                username,
                password: lookup("SMTP_PASSWORD").unwrap_or_default(),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
