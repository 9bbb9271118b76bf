#![allow(dead_code)]

use recurly_domain::ClientConfig;
use recurly_infra::{connect, RecurlyClient};
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

pub const API_KEY: &str = "test-api-key";

/// `Basic` credentials for [`API_KEY`] with an empty password.
pub const EXPECTED_AUTHORIZATION: &str = "Basic dGVzdC1hcGkta2V5Og==";

/// A wiremock server driven from synchronous tests.
///
/// The runtime is only entered to start the server and mount mocks; the
/// blocking client must be called outside of it.
pub struct MockRecurly {
    // Declared first so the server shuts down before its runtime.
    pub server: MockServer,
    runtime: Runtime,
}

impl MockRecurly {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("tokio runtime should start");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// API root on the mock server, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}/v2", self.server.uri())
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(API_KEY).with_base_url(self.base_url())
    }

    pub fn client(&self) -> RecurlyClient {
        connect(self.config()).expect("client should connect")
    }

    pub fn received(&self) -> Vec<Request> {
        self.runtime.block_on(self.server.received_requests()).unwrap_or_default()
    }
}

pub fn account_xml(base_url: &str, code: &str) -> String {
    format!(
        r#"<account href="{base_url}/accounts/{code}">
  <account_code>{code}</account_code>
  <state>active</state>
  <email>{code}@example.com</email>
  <created_at type="datetime">2011-10-25T12:00:00Z</created_at>
</account>"#
    )
}

pub fn accounts_xml(base_url: &str, codes: &[&str]) -> String {
    let items: String = codes.iter().map(|code| account_xml(base_url, code)).collect();
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<accounts type=\"array\">{items}</accounts>")
}
