//! Client side of the waitlist: the sign-up form state machine and the
//! transport it submits through.

pub mod form;
pub mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use form::{FormView, WaitlistForm};
pub use http::HttpWaitlistApi;

/// What the server said about a submission that reached it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { status: u16 },
}

/// The request never produced a response.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),
}

#[async_trait]
pub trait WaitlistApi: Send + Sync {
    async fn submit(&self, email: &str) -> Result<SubmitOutcome, TransportError>;
}
