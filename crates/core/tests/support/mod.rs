//! Shared test helpers for `recurly-core` integration tests.
//!
//! Two in-memory transports: a scripted one that replays canned responses
//! and records every request, and a small paginated accounts server.

#![allow(dead_code)]

pub mod paged_server;
pub mod scripted;

use recurly_core::{Client, Transport};
use recurly_domain::ClientConfig;

pub use paged_server::PagedAccountsServer;
pub use scripted::ScriptedTransport;

pub const BASE_URL: &str = "https://api.recurly.test/v2/";
pub const API_KEY: &str = "test-api-key";

/// Client over `transport` pointed at the test base URL.
pub fn client<T: Transport>(transport: T) -> Client<T> {
    let config = ClientConfig::new(API_KEY).with_base_url(BASE_URL);
    Client::new(config, transport).expect("test config is valid")
}

pub fn account_xml(code: &str) -> String {
    format!(
        r#"<account href="{BASE_URL}accounts/{code}">
  <account_code>{code}</account_code>
  <state>active</state>
  <email>{code}@example.com</email>
  <created_at type="datetime">2011-10-25T12:00:00Z</created_at>
</account>"#
    )
}

pub fn document(body: &str) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{body}")
}
