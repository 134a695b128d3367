//! SMTP relay using lettre, authenticated with the mailbox's own credentials.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    app_error::{AppError, AppResult},
    infra::error::InfraError,
    use_cases::waitlist::EmailSender,
};

const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailSender {
    /// Implicit TLS relay on port 465. The login user doubles as the sender address.
    pub fn new(host: &str, username: &str, password: &SecretString) -> Result<Self, InfraError> {
        let from: Mailbox = username.parse().map_err(|_| InfraError::ConfigInvalid {
            var: "EMAIL_USER",
            reason: "not an email address".into(),
        })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|source| InfraError::SmtpTransport {
                host: host.to_string(),
                source,
            })?
            .timeout(Some(SMTP_TIMEOUT))
            .credentials(Credentials::new(
                username.to_string(),
                password.expose_secret().to_string(),
            ))
            .build();

        Ok(Self { transport, from })
    }

    fn build_message(&self, to: &str, subject: &str, html: &str) -> AppResult<Message> {
        let to: Mailbox = to
            .parse()
            .map_err(|_| AppError::EmailDelivery(format!("Invalid recipient address: {to}")))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .singlepart(SinglePart::html(html.to_string()))
            .map_err(|e| AppError::EmailDelivery(format!("Failed to build message: {e}")))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        let message = self.build_message(to, subject, html)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::EmailDelivery(format!("SMTP error: {e}")))?;

        Ok(())
    }
}
