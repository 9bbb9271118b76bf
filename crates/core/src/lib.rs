//! # Recurly Core
//!
//! Client logic for the Recurly v2 API, independent of any HTTP library.
//!
//! This crate contains:
//! - The [`Transport`] port the client sends requests through
//! - The XML codec and failure classification
//! - The CRUD primitives, cursor pagination and per-resource operations
//!
//! ## Architecture Principles
//! - Depends only on `recurly-domain`
//! - No network code; adapters live in `recurly-infra`
//! - Every call is synchronous and returns when its response is handled

pub mod client;
pub mod codec;
pub mod http;
mod resources;

pub use client::{parse_link_header, Client, PageCursors, Pager};
pub use http::{HttpMethod, HttpRequest, HttpResponse, QueryParams, Transport};
