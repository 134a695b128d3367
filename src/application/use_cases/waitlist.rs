use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult, EMAIL_REQUIRED_MESSAGE},
    application::email_templates::waitlist_confirmation_email,
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// Persistence for waitlist entries. Implementations must overwrite an existing
/// entry with the same email instead of failing.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn upsert(&self, entry: &WaitlistEntry) -> AppResult<()>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    email: Arc<dyn EmailSender>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, email: Arc<dyn EmailSender>) -> Self {
        Self { repo, email }
    }

    /// Store `email` on the waitlist and send the confirmation.
    ///
    /// The write always finishes before the send starts. If the send fails the
    /// entry stays stored and the caller still gets an error.
    #[instrument(skip(self))]
    pub async fn join(&self, email: &str) -> AppResult<WaitlistEntry> {
        if email.is_empty() {
            return Err(AppError::InvalidInput(EMAIL_REQUIRED_MESSAGE.into()));
        }

        let entry = WaitlistEntry::new(email, Utc::now());
        self.repo.upsert(&entry).await?;
        tracing::debug!(submitted_at = %entry.submitted_at, "Waitlist entry stored");

        let (subject, html) = waitlist_confirmation_email();
        if let Err(err) = self.email.send(email, subject, html).await {
            tracing::warn!(error = %err, "Waitlist entry stored but confirmation email failed");
            return Err(err);
        }

        tracing::info!("Waitlist confirmation sent");
        Ok(entry)
    }
}
