//! Typed links to other records
//!
//! Records point at related records through empty elements carrying an
//! `href` attribute (`<account href="https://.../accounts/1"/>`). A
//! [`Reference`] keeps that link unresolved; the client fetches the target on
//! demand from the reference's kind and trailing identifier.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::resource::{Resource, ResourceKind};

#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Reference<R> {
    #[serde(rename = "@href", default)]
    href: String,
    #[serde(skip)]
    target: PhantomData<fn() -> R>,
}

impl<R> Reference<R> {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into(), target: PhantomData }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Identifier of the target: the last non-empty path segment of the
    /// link. `None` when the link carries no usable segment.
    pub fn code(&self) -> Option<&str> {
        let path = self.href.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        let path = match path.find("://") {
            Some(scheme_end) => {
                let rest = &path[scheme_end + 3..];
                rest.find('/').map_or("", |host_end| &rest[host_end..])
            }
            None => path,
        };
        path.rsplit('/').next().filter(|segment| !segment.is_empty())
    }
}

impl<R: Resource> Reference<R> {
    pub fn kind(&self) -> ResourceKind {
        R::KIND
    }
}

impl<R> Clone for Reference<R> {
    fn clone(&self) -> Self {
        Self::new(self.href.clone())
    }
}

impl<R> PartialEq for Reference<R> {
    fn eq(&self, other: &Self) -> bool {
        self.href == other.href
    }
}

impl<R> Eq for Reference<R> {}

impl<R> Default for Reference<R> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<R> fmt::Debug for Reference<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reference").field(&self.href).finish()
    }
}
