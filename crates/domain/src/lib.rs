//! # Recurly Domain
//!
//! Business types for the Recurly v2 client.
//!
//! This crate contains:
//! - Resource records (accounts, plans, subscriptions, ...) and their XML
//!   mapping
//! - The error taxonomy and `Result` alias
//! - Client configuration
//! - Endpoint and header constants
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O; encoding and transport live in `recurly-core` and
//!   `recurly-infra`

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod resource;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::ClientConfig;
pub use errors::*;
pub use resource::{Addressable, Resource, ResourceKind};
pub use types::*;
pub use utils::{CurrencyAmount, CurrencyAmounts, Reference};
