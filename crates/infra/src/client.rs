//! Wiring a [`Client`] to the real HTTP transport.

use std::time::Duration;

use recurly_core::Client;
use recurly_domain::{ClientConfig, Result};

use crate::config;
use crate::http::HttpTransport;

/// A client talking to Recurly over `reqwest`.
pub type RecurlyClient = Client<HttpTransport>;

/// Build a client for `config`, applying its timeout to the transport.
pub fn connect(config: ClientConfig) -> Result<RecurlyClient> {
    let mut builder = HttpTransport::builder();
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let transport = builder.build()?;
    Client::new(config, transport)
}

/// [`connect`] with configuration from [`config::load`].
pub fn connect_from_env() -> Result<RecurlyClient> {
    connect(config::load()?)
}
