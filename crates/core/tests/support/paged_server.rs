//! In-memory server for the accounts collection with cursor paging.

use std::sync::{Arc, Mutex};

use recurly_core::{HttpMethod, HttpRequest, HttpResponse, QueryParams, Transport};
use recurly_domain::Result;

use super::{account_xml, document, BASE_URL};

/// Serves `GET accounts` over a fixed list of account codes.
///
/// The cursor is the offset of the first record on the page. `per_page`
/// defaults to 2. Pages carry `X-Records` and a `Link` header with `next`
/// and `prev` entries where they exist.
#[derive(Clone)]
pub struct PagedAccountsServer {
    codes: Arc<Vec<String>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    failing_cursors: Arc<Mutex<Vec<String>>>,
}

impl PagedAccountsServer {
    pub fn with_accounts(count: usize) -> Self {
        Self {
            codes: Arc::new((1..=count).map(|n| n.to_string()).collect()),
            requests: Arc::new(Mutex::new(Vec::new())),
            failing_cursors: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer requests for `cursor` with a 500 from now on.
    pub fn fail_cursor(&self, cursor: &str) {
        self.failing_cursors.lock().unwrap().push(cursor.to_string());
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Query parameters of every request, decoded.
    pub fn queries(&self) -> Vec<QueryParams> {
        self.requests()
            .iter()
            .map(|r| r.url.query_pairs().into_owned().collect())
            .collect()
    }

    fn link(&self, offset: usize, per_page: usize, rel: &str) -> String {
        format!("<{BASE_URL}accounts?cursor={offset}&per_page={per_page}>; rel=\"{rel}\"")
    }
}

impl Transport for PagedAccountsServer {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        assert_eq!(request.method, HttpMethod::Get);

        let query: QueryParams = request.url.query_pairs().into_owned().collect();
        if let Some(cursor) = query.get("cursor") {
            if self.failing_cursors.lock().unwrap().iter().any(|c| c == cursor) {
                return Ok(HttpResponse::new(500, "<error><symbol>internal_server_error</symbol></error>"));
            }
        }

        let per_page: usize = query.get("per_page").map_or(2, |v| v.parse().unwrap());
        let offset: usize = query.get("cursor").map_or(0, |v| v.parse().unwrap());
        let end = (offset + per_page).min(self.codes.len());

        let records: String = self.codes[offset..end].iter().map(|code| account_xml(code)).collect();
        let body = document(&format!("<accounts type=\"array\">{records}</accounts>"));

        let mut links = Vec::new();
        if offset > 0 {
            links.push(self.link(offset.saturating_sub(per_page), per_page, "prev"));
        }
        if end < self.codes.len() {
            links.push(self.link(end, per_page, "next"));
        }

        let mut response = HttpResponse::new(200, body).with_header("X-Records", self.codes.len().to_string());
        if !links.is_empty() {
            response = response.with_header("Link", links.join(", "));
        }
        Ok(response)
    }
}
