//! The waitlist sign-up form, independent of any UI toolkit.
//!
//! A submit runs in two halves so a renderer can show the in-flight state:
//! [`WaitlistForm::begin_submit`] validates and locks the form, and
//! [`WaitlistForm::finish_submit`] applies whatever the transport returned.
//! [`WaitlistForm::submit`] does both around one request.

use crate::{
    application::validators::is_valid_email,
    client::{SubmitOutcome, TransportError, WaitlistApi},
};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Submission failed. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

pub const EMAIL_PLACEHOLDER: &str = "Enter your email for early access";
pub const SUBMIT_LABEL: &str = "Get Early Access";
pub const SUBMITTING_LABEL: &str = "Joining...";
pub const CONFIRMATION_MESSAGE: &str = "🎉 Thanks! You're on the list!";

/// What a renderer should draw for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView<'a> {
    Form {
        email: &'a str,
        placeholder: &'static str,
        button_label: &'static str,
        disabled: bool,
        error: Option<&'a str>,
    },
    Confirmation {
        message: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    email: String,
    is_submitting: bool,
    is_success: bool,
    error: Option<String>,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Input and button are both disabled while a request is in flight.
    pub fn controls_disabled(&self) -> bool {
        self.is_submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Typing into the input. Ignored while disabled or once confirmed.
    pub fn set_email(&mut self, value: impl Into<String>) {
        if self.controls_disabled() || self.is_success {
            return;
        }
        self.email = value.into();
    }

    pub fn view(&self) -> FormView<'_> {
        if self.is_success {
            return FormView::Confirmation {
                message: CONFIRMATION_MESSAGE,
            };
        }
        FormView::Form {
            email: &self.email,
            placeholder: EMAIL_PLACEHOLDER,
            button_label: self.button_label(),
            disabled: self.controls_disabled(),
            error: self.error(),
        }
    }

    /// Validate and lock the form. Returns the address to send, or `None` when
    /// no request should be made.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_submitting || self.is_success {
            return None;
        }

        if !is_valid_email(&self.email) {
            self.error = Some(INVALID_EMAIL_MESSAGE.to_string());
            return None;
        }

        self.error = None;
        self.is_submitting = true;
        Some(self.email.clone())
    }

    /// Apply the result of the request started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, result: Result<SubmitOutcome, TransportError>) {
        if !self.is_submitting {
            return;
        }

        match result {
            Ok(SubmitOutcome::Accepted) => {
                self.is_success = true;
                self.email.clear();
            }
            Ok(SubmitOutcome::Rejected { status }) => {
                tracing::warn!(status, "Waitlist submission failed");
                self.error = Some(SUBMISSION_FAILED_MESSAGE.to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "Waitlist submission did not reach the server");
                self.error = Some(NETWORK_ERROR_MESSAGE.to_string());
            }
        }
        self.is_submitting = false;
    }

    /// Validate, send at most one request, and apply its result.
    pub async fn submit(&mut self, api: &dyn WaitlistApi) {
        let Some(email) = self.begin_submit() else {
            return;
        };
        let result = api.submit(&email).await;
        self.finish_submit(result);
    }
}
