//! Test utilities for use case and HTTP testing.
//!
//! This module provides:
//! - In-memory fakes for the waitlist store and the email relay
//! - A builder that wires those fakes into an `AppState`

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
