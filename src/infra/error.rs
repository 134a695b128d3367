use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// SECURITY: Display messages are sanitized and safe for logs/console output.
/// Debug output includes the full #[source] error chain, which for credential
/// parsing may quote parts of the key file. Use Display (%e) in logs.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: environment variable {var} not set")]
    ConfigMissing { var: &'static str },

    #[error("Configuration error: environment variable {var} is invalid ({reason})")]
    ConfigInvalid { var: &'static str, reason: String },

    #[error("Service account credentials could not be read. Check FIREBASE_KEY_PATH.")]
    CredentialsRead(#[source] std::io::Error),

    #[error("Service account credentials are not valid JSON or miss required fields.")]
    CredentialsParse(#[source] serde_json::Error),

    #[error("Service account private key is not a valid RSA PEM key.")]
    InvalidPrivateKey(#[source] jsonwebtoken::errors::Error),

    #[error("HTTP client could not be built")]
    HttpClient(#[source] reqwest::Error),

    #[error("SMTP transport could not be built for host {host}")]
    SmtpTransport {
        host: String,
        #[source]
        source: lettre::transport::smtp::Error,
    },

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
