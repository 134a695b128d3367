//! OAuth2 access tokens for a Google service account (JWT-bearer grant).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    infra::{credentials::ServiceAccountKey, error::InfraError},
};

pub const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Tokens are refreshed this long before Google says they expire.
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

pub struct ServiceAccountTokenProvider {
    client: Client,
    client_email: String,
    token_uri: String,
    signing_key: EncodingKey,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenProvider {
    pub fn new(client: Client, key: &ServiceAccountKey) -> Result<Self, InfraError> {
        let signing_key = EncodingKey::from_rsa_pem(key.private_key.expose_secret().as_bytes())
            .map_err(InfraError::InvalidPrivateKey)?;

        Ok(Self {
            client,
            client_email: key.client_email.clone(),
            token_uri: key.token_uri.clone(),
            signing_key,
            cached: Mutex::new(None),
        })
    }

    /// A bearer token for the datastore scope, reusing the cached one while it
    /// is still valid.
    pub async fn access_token(&self) -> AppResult<String> {
        let mut cached = self.cached.lock().await;
        let now = Utc::now();

        if let Some(token) = cached.as_ref()
            && token.expires_at - Duration::seconds(REFRESH_MARGIN_SECS) > now
        {
            return Ok(token.value.clone());
        }

        let fresh = self.exchange(now).await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    fn signed_assertion(&self, now: DateTime<Utc>) -> AppResult<String> {
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: DATASTORE_SCOPE,
            aud: &self.token_uri,
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
        };
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token assertion: {e}")))
    }

    async fn exchange(&self, now: DateTime<Utc>) -> AppResult<CachedToken> {
        let assertion = self.signed_assertion(now)?;

        let response: TokenResponse = self
            .client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Database(format!("Token request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Database(format!("Token endpoint error: {e}")))?
            .json()
            .await
            .map_err(|e| AppError::Database(format!("Unreadable token response: {e}")))?;

        tracing::debug!(expires_in = response.expires_in, "Obtained datastore access token");

        Ok(CachedToken {
            value: response.access_token,
            expires_at: now + Duration::seconds(response.expires_in),
        })
    }
}
