use chrono::{DateTime, Utc};

/// One person on the waitlist. The email is the document key, so a second
/// sign-up with the same address replaces the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}

impl WaitlistEntry {
    pub fn new(email: impl Into<String>, submitted_at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            submitted_at,
        }
    }
}
