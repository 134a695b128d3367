pub mod adapters;
pub mod application;
pub mod client;
pub mod domain;
pub mod infra;

// In-memory fakes shared by the HTTP and use case tests.
#[cfg(test)]
pub mod test_utils;

// Re-exports for shorter use statements.
pub use application::*;
pub use domain::*;
