//! Warung — shared plumbing for the gateway, user, and order services.
//!
//! Response envelopes, the service error type, envelope-speaking
//! extractors, environment configuration, SQLite pool setup, the
//! outbound HTTP client, and the shutdown signal.

pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod http;
pub mod shutdown;
