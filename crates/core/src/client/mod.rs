//! Client, CRUD primitives and pagination

pub mod pager;
pub mod service;

pub use pager::{parse_link_header, PageCursors, Pager};
pub use service::Client;
