//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates an `AppState` whose store and relay are
//! in-memory fakes, so route tests can assert on what was written and sent.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{EmailSender, WaitlistRepo, WaitlistUseCases},
    infra::config::{AppConfig, EmailConfig, StoreConfig},
    test_utils::{InMemoryEmailSender, InMemoryWaitlistRepo},
};

/// Builder for creating `AppState` with in-memory collaborators.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryWaitlistRepo::failing("unavailable"));
/// let app_state = TestAppStateBuilder::new().with_repo(repo.clone()).build();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    repo: Option<Arc<dyn WaitlistRepo>>,
    email_sender: Option<Arc<dyn EmailSender>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom waitlist store.
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Set a custom email sender.
    pub fn with_email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Create app state with a fresh in-memory store and sender.
    /// Returns both fakes alongside the state for test assertions.
    pub fn build_with_mocks(
        self,
    ) -> (
        AppState,
        Arc<InMemoryWaitlistRepo>,
        Arc<InMemoryEmailSender>,
    ) {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let email_sender = Arc::new(InMemoryEmailSender::new());

        let app_state = self
            .with_repo(repo.clone())
            .with_email_sender(email_sender.clone())
            .build();

        (app_state, repo, email_sender)
    }

    pub fn build(self) -> AppState {
        let repo = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryWaitlistRepo::new()));
        let email_sender = self
            .email_sender
            .unwrap_or_else(|| Arc::new(InMemoryEmailSender::new()));

        AppState {
            config: Arc::new(test_config()),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo, email_sender)),
        }
    }
}

/// Minimal config pointing at an emulator that is never contacted.
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        store: StoreConfig {
            project_id: "demo-worksphere".to_string(),
            emulator_host: Some("localhost:8080".to_string()),
            credentials: None,
        },
        email: EmailConfig::Smtp {
            host: "smtp.example.com".to_string(),
            username: "team@worksphere.life".to_string(),
            password: SecretString::new("test_password".into()),
        },
    }
}
