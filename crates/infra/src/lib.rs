//! # Recurly Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The blocking `reqwest` implementation of [`recurly_core::Transport`]
//! - Configuration loading from the environment and from files
//! - Conversions from third-party errors into `RecurlyError`
//! - A `tracing` subscriber helper for binaries and tests
//!
//! ## Architecture
//! - Implements traits defined in `recurly-core`
//! - Contains all "impure" code (network, filesystem, process environment)

pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use client::{connect, connect_from_env, RecurlyClient};
pub use errors::InfraError;
pub use http::{HttpTransport, HttpTransportBuilder};
