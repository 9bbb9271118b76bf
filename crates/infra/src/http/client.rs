use std::time::Duration;

use recurly_core::{HttpMethod, HttpRequest, HttpResponse, Transport};
use recurly_domain::constants::USER_AGENT;
use recurly_domain::{RecurlyError, Result};
use reqwest::blocking::{Client as ReqwestClient, Response};
use reqwest::Method;
use tracing::trace;

use crate::errors::InfraError;

/// Blocking HTTP transport. One request in, one response out; no retries.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: ReqwestClient,
}

impl HttpTransport {
    /// Start building a new transport.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest { method, url, headers, body } = request;

        let mut builder = self.client.request(to_reqwest_method(method), url.as_str());
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        trace!(%method, %url, "sending HTTP request");
        let response = builder.send().map_err(|err| RecurlyError::from(InfraError::from(err)))?;
        trace!(%method, %url, status = response.status().as_u16(), "received HTTP response");

        into_http_response(response)
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn into_http_response(response: Response) -> Result<HttpResponse> {
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (name.as_str().to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
        })
        .collect();
    let body = response.bytes().map_err(|err| RecurlyError::from(InfraError::from(err)))?;

    Ok(HttpResponse { status, headers, body: body.to_vec() })
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    timeout: Option<Duration>,
    user_agent: String,
    accept_invalid_certs: bool,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self { timeout: None, user_agent: USER_AGENT.to_string(), accept_invalid_certs: false }
    }
}

impl HttpTransportBuilder {
    /// Total time allowed for one request. Unset means the reqwest default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Test-only helper to allow insecure TLS (e.g., self-signed certs).
    #[cfg(test)]
    pub fn accept_invalid_certs(mut self, enabled: bool) -> Self {
        self.accept_invalid_certs = enabled;
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        let mut builder = ReqwestClient::builder().user_agent(self.user_agent).no_proxy();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if self.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|err| RecurlyError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(HttpTransport { client })
    }
}
