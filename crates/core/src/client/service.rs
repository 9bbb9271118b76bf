//! The client: request dispatch and the CRUD primitives every resource
//! operation is built from.

use recurly_domain::{
    Addressable, ApiError, ClientConfig, RecurlyError, Reference, Resource, Result,
};
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::pager::Pager;
use crate::codec::{classify, decode_record, encode};
use crate::http::{build_url, standard_headers, HttpMethod, HttpRequest, HttpResponse, QueryParams, Transport};

/// Synchronous Recurly client over a pluggable [`Transport`].
///
/// Holds only immutable configuration, so one client can serve concurrent
/// calls when its transport allows it.
pub struct Client<T> {
    config: ClientConfig,
    base_url: Url,
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Build a client; fails when the API key is empty or the base URL does
    /// not parse.
    pub fn new(config: ClientConfig, transport: T) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(RecurlyError::Config("API key must not be empty".to_string()));
        }
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| {
            RecurlyError::Config(format!("invalid base URL '{}': {e}", config.base_url))
        })?;
        Ok(Self { config, base_url, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn debug_enabled(&self) -> bool {
        self.config.debug
    }

    /// Send one request and return the raw response, whatever its status.
    pub fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: &QueryParams,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse> {
        let url = build_url(&self.base_url, path, query)?;
        let headers = standard_headers(&self.config.api_key, body.is_some());
        let request = HttpRequest { method, url, headers, body };

        if self.config.debug {
            debug!(
                method = %request.method,
                url = %request.url,
                body = %request.body_text().unwrap_or_default(),
                "sending request"
            );
        }

        let response = self.transport.execute(request).map_err(|err| {
            if self.config.debug {
                debug!(error = %err, "transport failed");
            }
            err
        })?;

        if self.config.debug {
            debug!(
                status = response.status,
                headers = ?response.headers,
                body = %response.body_text(),
                "received response"
            );
        }
        Ok(response)
    }

    /// Fetch a record through its kind and identifier.
    pub fn resolve<R: Addressable>(&self, reference: &Reference<R>) -> Result<R> {
        let code = self.require(reference.code(), "reference identifier")?;
        self.fetch(&R::item_path(code), &QueryParams::new())
    }

    /* ---------------------------------------------------------------------- */
    /* CRUD primitives                                                        */
    /* ---------------------------------------------------------------------- */

    /// GET a single record. Only `200` is a success.
    pub(crate) fn fetch<R: Resource>(&self, path: &str, query: &QueryParams) -> Result<R> {
        let response = self.send(HttpMethod::Get, path, query, None)?;
        if response.status != 200 {
            return Err(self.failure(&response));
        }
        decode_record(&response.body)
    }

    /// POST `payload`; on success the response replaces `record`.
    pub(crate) fn create<P: Serialize, R: Resource>(
        &self,
        path: &str,
        payload: &P,
        record: &mut R,
    ) -> Result<()> {
        let body = encode(payload)?;
        let response = self.send(HttpMethod::Post, path, &QueryParams::new(), Some(body))?;
        self.sync(&response, record)
    }

    /// PUT `payload`; a non-empty success body replaces `record`.
    pub(crate) fn update<P: Serialize, R: Resource>(
        &self,
        path: &str,
        payload: &P,
        record: &mut R,
    ) -> Result<()> {
        let body = encode(payload)?;
        let response = self.send(HttpMethod::Put, path, &QueryParams::new(), Some(body))?;
        self.sync(&response, record)
    }

    /// Bodiless request for actions driven by the path and query alone; a
    /// non-empty success body replaces `record`.
    pub(crate) fn act<R: Resource>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &QueryParams,
        record: &mut R,
    ) -> Result<()> {
        let response = self.send(method, path, query, None)?;
        self.sync(&response, record)
    }

    /// DELETE; any status below 400 is a success.
    pub(crate) fn delete(&self, path: &str, query: &QueryParams) -> Result<()> {
        let response = self.send(HttpMethod::Delete, path, query, None)?;
        if !response.is_success() {
            return Err(self.failure(&response));
        }
        Ok(())
    }

    /// Open a pager over the collection at `path`.
    ///
    /// Records decoded from a nested collection get `parent` bound to them.
    pub(crate) fn list<R: Resource>(
        &self,
        path: String,
        parent: Option<&str>,
        params: &QueryParams,
    ) -> Result<Pager<'_, R, T>> {
        Pager::open(self, path, parent.map(str::to_string), params)
    }

    /// Refuse to create a record the server already knows about.
    pub(crate) fn ensure_new<R: Resource>(&self, record: &R) -> Result<()> {
        if record.is_persisted() {
            let err = ApiError::already_exists(format!("{} already created", R::KIND));
            if self.config.debug {
                debug!(kind = %R::KIND, "refusing to create a persisted record");
            }
            return Err(err.into());
        }
        Ok(())
    }

    /// Unwrap an identifier the operation cannot proceed without.
    pub(crate) fn require<'a>(&self, value: Option<&'a str>, what: &str) -> Result<&'a str> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => {
                if self.config.debug {
                    debug!(missing = what, "rejecting request before sending");
                }
                Err(RecurlyError::InvalidInput(format!("{what} is required")))
            }
        }
    }

    fn sync<R: Resource>(&self, response: &HttpResponse, record: &mut R) -> Result<()> {
        if !response.is_success() {
            return Err(self.failure(response));
        }
        if !response.is_blank() {
            *record = decode_record(&response.body)?;
        }
        Ok(())
    }

    pub(crate) fn failure(&self, response: &HttpResponse) -> RecurlyError {
        let err = classify(response.status, &response.body);
        if self.config.debug {
            debug!(status = response.status, error = %err, "request failed");
        }
        err
    }
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").field("config", &self.config).field("base_url", &self.base_url.as_str()).finish()
    }
}
