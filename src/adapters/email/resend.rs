use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::waitlist::EmailSender,
};

pub const RESEND_API_URL: &str = "https://api.resend.com";

pub struct ResendEmailSender {
    client: Client,
    api_url: String,
    api_key: SecretString,
    from: String,
}

impl ResendEmailSender {
    pub fn new(client: Client, api_key: SecretString, from: String) -> Self {
        Self::with_api_url(client, RESEND_API_URL.to_string(), api_key, from)
    }

    pub fn with_api_url(
        client: Client,
        api_url: String,
        api_key: SecretString,
        from: String,
    ) -> Self {
        Self {
            client,
            api_url,
            api_key,
            from,
        }
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        let body = ResendReq {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        self.client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::EmailDelivery(format!("Failed to send email: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::EmailDelivery(format!("Email API error: {e}")))?;

        Ok(())
    }
}
