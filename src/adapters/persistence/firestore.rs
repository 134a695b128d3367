use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::{error::InfraError, google_auth::ServiceAccountTokenProvider},
};

pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";
pub const WAITLIST_COLLECTION: &str = "waitlist";
/// The emulator treats this bearer token as an admin and skips security rules.
const EMULATOR_OWNER_TOKEN: &str = "owner";

/// Firestore over its REST API. Documents live at
/// `projects/{project}/databases/(default)/documents/{collection}/{id}`.
pub struct FirestorePersistence {
    client: Client,
    documents_url: Url,
    /// `None` when talking to the emulator.
    auth: Option<ServiceAccountTokenProvider>,
}

impl FirestorePersistence {
    pub fn new(
        client: Client,
        base_url: &str,
        project_id: &str,
        auth: Option<ServiceAccountTokenProvider>,
    ) -> Result<Self, InfraError> {
        let invalid = |reason: String| InfraError::ConfigInvalid {
            var: "FIRESTORE_EMULATOR_HOST",
            reason,
        };

        let mut documents_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        documents_url
            .path_segments_mut()
            .map_err(|_| invalid(format!("{base_url} cannot be a base URL")))?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                project_id,
                "databases",
                "(default)",
                "documents",
            ]);

        Ok(Self {
            client,
            documents_url,
            auth,
        })
    }

    /// Base URL for a Firestore emulator given as `host:port`.
    pub fn emulator_base_url(emulator_host: &str) -> String {
        format!("http://{emulator_host}")
    }

    fn document_url(&self, collection: &str, document_id: &str) -> AppResult<Url> {
        let mut url = self.documents_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Internal("Firestore URL cannot take path segments".into()))?
            .push(collection)
            .push(document_id);
        Ok(url)
    }

    async fn authorize(&self, request: RequestBuilder) -> AppResult<RequestBuilder> {
        match &self.auth {
            Some(provider) => Ok(request.bearer_auth(provider.access_token().await?)),
            None => Ok(request.bearer_auth(EMULATOR_OWNER_TOKEN)),
        }
    }
}

#[derive(Serialize)]
struct Document<T> {
    fields: T,
}

#[derive(Serialize)]
struct WaitlistFields<'a> {
    email: StringValue<'a>,
    timestamp: TimestampValue,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StringValue<'a> {
    string_value: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimestampValue {
    timestamp_value: String,
}

#[async_trait]
impl WaitlistRepo for FirestorePersistence {
    /// PATCH without an update mask replaces the whole document and creates it
    /// when missing, so a repeated email overwrites the earlier timestamp.
    async fn upsert(&self, entry: &WaitlistEntry) -> AppResult<()> {
        let url = self.document_url(WAITLIST_COLLECTION, &entry.email)?;
        let body = Document {
            fields: WaitlistFields {
                email: StringValue {
                    string_value: &entry.email,
                },
                timestamp: TimestampValue {
                    timestamp_value: entry
                        .submitted_at
                        .to_rfc3339_opts(SecondsFormat::Micros, true),
                },
            },
        };

        let request = self.authorize(self.client.patch(url).json(&body)).await?;
        request
            .send()
            .await
            .map_err(|e| AppError::Database(format!("Firestore request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Database(format!("Firestore write rejected: {e}")))?;

        Ok(())
    }
}
