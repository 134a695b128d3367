use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Email delivery failed: {0}")]
    EmailDelivery(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to hand back to the caller.
    ///
    /// Downstream failures all collapse to the same generic text; the cause is
    /// only ever logged.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::InvalidInput(msg) => msg.as_str(),
            AppError::Database(_) | AppError::EmailDelivery(_) | AppError::Internal(_) => {
                GENERIC_FAILURE_MESSAGE
            }
        }
    }
}

pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong.";

pub type AppResult<T> = Result<T, AppError>;
