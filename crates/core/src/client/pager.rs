//! Cursor pagination over collection endpoints
//!
//! A pager holds one page of records plus the cursors the server advertised
//! in its `Link` header. Moving to another page re-issues the original
//! request with only the cursor changed; every other query parameter is kept.
//! A move either fully succeeds and replaces the page, or fails and leaves
//! the current page untouched.

use recurly_domain::constants::{HEADER_LINK, HEADER_RECORD_COUNT, PARAM_CURSOR, PARAM_PER_PAGE};
use recurly_domain::{Resource, Result};
use url::Url;

use super::service::Client;
use crate::codec::decode_collection;
use crate::http::{HttpMethod, QueryParams, Transport};

/// Cursors advertised for the neighbouring pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursors {
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Parse a `Link` header into next/prev cursors.
///
/// Entries look like `<https://.../accounts?cursor=1304958672>; rel="next"`.
/// Entries without a `cursor` query parameter are ignored; `rel` values other
/// than `next` and `prev` are ignored.
pub fn parse_link_header(value: &str) -> PageCursors {
    let mut cursors = PageCursors::default();
    for entry in value.split(',') {
        let mut parts = entry.split(';');
        let Some(target) = parts.next() else { continue };
        let target = target.trim().trim_start_matches('<').trim_end_matches('>');

        let rel = parts.find_map(|param| {
            let (key, value) = param.split_once('=')?;
            key.trim().eq_ignore_ascii_case("rel").then(|| value.trim().trim_matches('"').to_ascii_lowercase())
        });
        let Some(rel) = rel else { continue };
        let cursor = cursor_of(target);

        match rel.as_str() {
            "next" => cursors.next = cursor,
            "prev" | "previous" => cursors.prev = cursor,
            _ => {}
        }
    }
    cursors
}

fn cursor_of(target: &str) -> Option<String> {
    let url = Url::parse(target)
        .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(target)))
        .ok()?;
    url.query_pairs()
        .find(|(key, _)| key == PARAM_CURSOR)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone)]
struct Page<R> {
    items: Vec<R>,
    raw_body: Vec<u8>,
    record_count: Option<u64>,
    cursors: PageCursors,
}

/// One page of a collection plus the means to move to its neighbours.
pub struct Pager<'c, R, T> {
    client: &'c Client<T>,
    path: String,
    parent: Option<String>,
    base_query: QueryParams,
    per_page: Option<String>,
    page: Page<R>,
}

impl<'c, R: Resource, T: Transport> Pager<'c, R, T> {
    /// Fetch the first page of `path`.
    ///
    /// `params` may carry a `cursor` (start mid-collection) and `per_page`;
    /// both are tracked separately from the remaining filters.
    pub(crate) fn open(
        client: &'c Client<T>,
        path: String,
        parent: Option<String>,
        params: &QueryParams,
    ) -> Result<Self> {
        let per_page = params.get(PARAM_PER_PAGE).map(str::to_string);
        let base_query = params.without(PARAM_CURSOR).without(PARAM_PER_PAGE);
        let mut pager = Self {
            client,
            path,
            parent,
            base_query,
            per_page,
            page: Page { items: Vec::new(), raw_body: Vec::new(), record_count: None, cursors: PageCursors::default() },
        };
        pager.page = pager.fetch(params.get(PARAM_CURSOR))?;
        Ok(pager)
    }

    /// Move to the next page. `Ok(false)` when there is none.
    pub fn next(&mut self) -> Result<bool> {
        let Some(cursor) = self.page.cursors.next.clone() else { return Ok(false) };
        self.page = self.fetch(Some(&cursor))?;
        Ok(true)
    }

    /// Move to the previous page. `Ok(false)` when there is none.
    pub fn prev(&mut self) -> Result<bool> {
        let Some(cursor) = self.page.cursors.prev.clone() else { return Ok(false) };
        self.page = self.fetch(Some(&cursor))?;
        Ok(true)
    }

    /// Jump back to the first page. `Ok(false)` when already on it.
    pub fn start(&mut self) -> Result<bool> {
        if self.page.cursors.prev.is_none() {
            return Ok(false);
        }
        self.page = self.fetch(None)?;
        Ok(true)
    }

    /// Records of the current page.
    pub fn items(&self) -> &[R] {
        &self.page.items
    }

    pub fn into_items(self) -> Vec<R> {
        self.page.items
    }

    /// Total size of the collection, when the server reported it.
    pub fn record_count(&self) -> Option<u64> {
        self.page.record_count
    }

    /// Undecoded body of the current page.
    pub fn raw_body(&self) -> &[u8] {
        &self.page.raw_body
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.page.cursors.next.as_deref()
    }

    pub fn prev_cursor(&self) -> Option<&str> {
        self.page.cursors.prev.as_deref()
    }

    pub fn has_next(&self) -> bool {
        self.page.cursors.next.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.page.cursors.prev.is_some()
    }

    pub fn per_page(&self) -> Option<&str> {
        self.per_page.as_deref()
    }

    /// Filters re-sent with every page request (cursor and page size
    /// excluded).
    pub fn base_query(&self) -> &QueryParams {
        &self.base_query
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Drain the current and all following pages.
    pub fn collect_remaining(mut self) -> Result<Vec<R>> {
        let mut all = std::mem::take(&mut self.page.items);
        while self.next()? {
            all.append(&mut self.page.items);
        }
        Ok(all)
    }

    fn request_query(&self, cursor: Option<&str>) -> QueryParams {
        let mut query = self.base_query.clone();
        if let Some(per_page) = &self.per_page {
            query.set(PARAM_PER_PAGE, per_page.as_str());
        }
        if let Some(cursor) = cursor {
            query.set(PARAM_CURSOR, cursor);
        }
        query
    }

    fn fetch(&self, cursor: Option<&str>) -> Result<Page<R>> {
        let query = self.request_query(cursor);
        let response = self.client.send(HttpMethod::Get, &self.path, &query, None)?;
        if !response.is_success() {
            return Err(self.client.failure(&response));
        }

        let cursors = response.header(HEADER_LINK).map(parse_link_header).unwrap_or_default();
        let record_count = response.header(HEADER_RECORD_COUNT).and_then(|v| v.trim().parse().ok());
        let mut items = if response.is_blank() {
            Vec::new()
        } else {
            decode_collection::<R>(&response.body)?
        };
        if let Some(parent) = &self.parent {
            for item in &mut items {
                item.bind_parent(parent);
            }
        }

        Ok(Page { items, raw_body: response.body, record_count, cursors })
    }
}

impl<R, T> std::fmt::Debug for Pager<'_, R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("path", &self.path)
            .field("items", &self.page.items.len())
            .field("record_count", &self.page.record_count)
            .field("cursors", &self.page.cursors)
            .finish_non_exhaustive()
    }
}
