//! Request construction: query parameters, URLs and standard headers

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use recurly_domain::constants::{
    ACCEPT_LANGUAGE, ACCEPT_XML, CONTENT_TYPE_XML, HEADER_ACCEPT, HEADER_ACCEPT_LANGUAGE,
    HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, HEADER_USER_AGENT, USER_AGENT,
};
use recurly_domain::{RecurlyError, Result};
use url::Url;

/// Ordered query parameters with at most one value per key.
///
/// Operations that derive a new request always work on a copy, so a caller's
/// parameters are never changed behind its back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`QueryParams::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Replace the value of `key`, or append it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(index).1)
    }

    /// Copy without `key`.
    #[must_use]
    pub fn without(&self, key: &str) -> Self {
        Self(self.0.iter().filter(|(k, _)| k != key).cloned().collect())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

/// Resolve `path` against `base` and merge `extra` into its query.
///
/// `path` may carry its own query string. A key present in both keeps its
/// position from `path` and takes the value from `extra`. The merged query is
/// encoded exactly once.
pub fn build_url(base: &Url, path: &str, extra: &QueryParams) -> Result<Url> {
    let mut url = base
        .join(path)
        .map_err(|e| RecurlyError::InvalidInput(format!("invalid request path '{path}': {e}")))?;

    let mut merged: QueryParams = url.query_pairs().into_owned().collect();
    for (key, value) in extra.iter() {
        merged.set(key, value);
    }

    if merged.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(merged.iter());
    }
    Ok(url)
}

/// Headers sent on every request.
///
/// `Content-Type` is only present when the request carries a body.
pub fn standard_headers(api_key: &str, has_body: bool) -> Vec<(String, String)> {
    let credentials = STANDARD.encode(format!("{api_key}:"));
    let mut headers = vec![
        (HEADER_AUTHORIZATION.to_string(), format!("Basic {credentials}")),
        (HEADER_ACCEPT.to_string(), ACCEPT_XML.to_string()),
        (HEADER_ACCEPT_LANGUAGE.to_string(), ACCEPT_LANGUAGE.to_string()),
        (HEADER_USER_AGENT.to_string(), USER_AGENT.to_string()),
    ];
    if has_body {
        headers.push((HEADER_CONTENT_TYPE.to_string(), CONTENT_TYPE_XML.to_string()));
    }
    headers
}
