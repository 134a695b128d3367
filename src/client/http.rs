use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::client::{SubmitOutcome, TransportError, WaitlistApi};

pub const WAITLIST_PATH: &str = "api/waitlist";

/// Submits to a running waitlist backend over HTTP.
pub struct HttpWaitlistApi {
    client: Client,
    endpoint: Url,
}

#[derive(Serialize)]
struct SubmitReq<'a> {
    email: &'a str,
}

impl HttpWaitlistApi {
    /// `base_url` is the site origin, e.g. `https://worksphere.life`.
    pub fn new(client: Client, base_url: &str) -> Result<Self, TransportError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(WAITLIST_PATH)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WaitlistApi for HttpWaitlistApi {
    async fn submit(&self, email: &str) -> Result<SubmitOutcome, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SubmitReq { email })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(SubmitOutcome::Accepted)
        } else {
            tracing::debug!(status = status.as_u16(), "Waitlist submission rejected");
            Ok(SubmitOutcome::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
