//! XML wire codec
//!
//! Records map to documents through their serde attributes. Decoding checks
//! the root element name first, so a document of the wrong kind is reported
//! as malformed instead of silently decoding into an empty record.

mod classify;

pub use classify::classify;

use quick_xml::events::Event;
use quick_xml::Reader;
use recurly_domain::{RecurlyError, Resource, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Encode `value` as a standalone document.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let body = quick_xml::se::to_string(value).map_err(|e| RecurlyError::Encode(e.to_string()))?;
    Ok(format!("{XML_DECLARATION}\n{body}").into_bytes())
}

/// Name of the document's root element, skipping the prolog.
pub fn root_element(text: &str) -> Option<String> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

/// Decode a document whose root element must be `root`.
pub fn decode<T: DeserializeOwned>(body: &[u8], root: &str) -> Result<T> {
    let text = std::str::from_utf8(body)
        .map_err(|e| RecurlyError::MalformedResponse(format!("response is not UTF-8: {e}")))?;
    match root_element(text) {
        Some(found) if found == root => {}
        Some(found) => {
            return Err(RecurlyError::MalformedResponse(format!(
                "expected <{root}> document, found <{found}>"
            )));
        }
        None => {
            return Err(RecurlyError::MalformedResponse(format!(
                "expected <{root}> document, found no element"
            )));
        }
    }
    quick_xml::de::from_str(text).map_err(|e| RecurlyError::MalformedResponse(e.to_string()))
}

/// Decode a single-record document.
pub fn decode_record<R: Resource>(body: &[u8]) -> Result<R> {
    decode(body, R::ROOT)
}

/// Decode a collection document into its items.
pub fn decode_collection<R: Resource>(body: &[u8]) -> Result<Vec<R>> {
    decode::<R::Collection>(body, R::COLLECTION_ROOT).map(Into::into)
}
