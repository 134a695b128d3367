use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;

use crate::infra::{
    credentials::{CredentialSource, ServiceAccountKey, load_service_account},
    error::InfraError,
};

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub store: StoreConfig,
    pub email: EmailConfig,
}

/// Document store settings after credential resolution.
pub struct StoreConfig {
    pub project_id: String,
    /// `host:port` of a Firestore emulator. Requests to it are not authenticated.
    pub emulator_host: Option<String>,
    /// Absent only when running against the emulator.
    pub credentials: Option<ServiceAccountKey>,
}

pub enum EmailConfig {
    Smtp {
        host: String,
        username: String,
        password: SecretString,
    },
    Resend {
        api_key: SecretString,
        from: String,
    },
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr = parse_bind_addr(env_lookup("BIND_ADDR"))?;
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .map_err(|_| InfraError::ConfigInvalid {
                    var: "CORS_ORIGIN",
                    reason: "not a valid header value".into(),
                })?;

        Ok(Self {
            bind_addr,
            cors_origin,
            store: StoreConfig::from_lookup(env_lookup)?,
            email: EmailConfig::from_lookup(env_lookup)?,
        })
    }
}

fn parse_bind_addr(value: Option<String>) -> Result<SocketAddr, InfraError> {
    match value {
        None => Ok(SocketAddr::from(([127, 0, 0, 1], 3001))),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| InfraError::ConfigInvalid {
                var: "BIND_ADDR",
                reason: e.to_string(),
            }),
    }
}

/// Unset and blank variables are treated the same.
fn env_lookup(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, InfraError> {
    lookup(var).ok_or(InfraError::ConfigMissing { var })
}

impl StoreConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InfraError> {
        let emulator_host = lookup("FIRESTORE_EMULATOR_HOST");

        let credentials = CredentialSource::from_vars(
            lookup("FIREBASE_KEY_PATH"),
            lookup("FIREBASE_SERVICE_ACCOUNT"),
        )
        .map(|source| load_service_account(&source))
        .transpose()?;

        if credentials.is_none() && emulator_host.is_none() {
            return Err(InfraError::ConfigMissing {
                var: "FIREBASE_KEY_PATH",
            });
        }

        let project_id = match lookup("FIREBASE_PROJECT_ID") {
            Some(project_id) => project_id,
            None => credentials
                .as_ref()
                .map(|key| key.project_id.clone())
                .ok_or(InfraError::ConfigMissing {
                    var: "FIREBASE_PROJECT_ID",
                })?,
        };

        Ok(Self {
            project_id,
            emulator_host,
            credentials,
        })
    }
}

impl EmailConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InfraError> {
        let provider = lookup("EMAIL_PROVIDER").unwrap_or_else(|| "smtp".to_string());

        match provider.trim().to_ascii_lowercase().as_str() {
            "smtp" => Ok(EmailConfig::Smtp {
                host: lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                username: required(&lookup, "EMAIL_USER")?,
                password: SecretString::new(required(&lookup, "EMAIL_PASS")?.into()),
            }),
            "resend" => Ok(EmailConfig::Resend {
                api_key: SecretString::new(required(&lookup, "RESEND_API_KEY")?.into()),
                from: required(&lookup, "EMAIL_FROM")?,
            }),
            other => Err(InfraError::ConfigInvalid {
                var: "EMAIL_PROVIDER",
                reason: format!("unknown provider {other:?}, expected smtp or resend"),
            }),
        }
    }
}
