//! In-memory fakes for the waitlist collaborators.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{EmailSender, WaitlistRepo},
    domain::entities::waitlist_entry::WaitlistEntry,
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo keyed by email, last write wins.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<HashMap<String, WaitlistEntry>>,
    upsert_calls: AtomicUsize,
    fail_with: Option<String>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repo whose every write fails with a database error.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn get(&self, email: &str) -> Option<WaitlistEntry> {
        self.entries.lock().unwrap().get(email).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of upsert calls, failed ones included.
    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn upsert(&self, entry: &WaitlistEntry) -> AppResult<()> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = &self.fail_with {
            return Err(AppError::Database(msg.clone()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(entry.email.clone(), entry.clone());
        Ok(())
    }
}

// ============================================================================
// InMemoryEmailSender
// ============================================================================

#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Email sender that records messages instead of delivering them.
#[derive(Default)]
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<CapturedEmail>>,
    attempts: AtomicUsize,
    fail_with: Option<String>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every send fails with a delivery error.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Emails that were accepted for delivery.
    pub fn captured_emails(&self) -> Vec<CapturedEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send calls, failed ones included.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = &self.fail_with {
            return Err(AppError::EmailDelivery(msg.clone()));
        }
        self.sent.lock().unwrap().push(CapturedEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}
