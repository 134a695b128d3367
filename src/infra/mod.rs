pub mod app;
pub mod config;
pub mod credentials;
pub mod error;
pub mod google_auth;
pub mod http_client;
pub mod setup;
