//! HTTP plumbing: the transport port and request construction

pub mod ports;
pub mod request;

pub use ports::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use request::{build_url, standard_headers, QueryParams};
