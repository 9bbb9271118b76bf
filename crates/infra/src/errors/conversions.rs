//! Conversions from external infrastructure errors into domain errors.

use quick_xml::de::DeError as XmlError;
use recurly_domain::RecurlyError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RecurlyError);

impl From<InfraError> for RecurlyError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RecurlyError> for InfraError {
    fn from(value: RecurlyError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRecurlyError {
    fn into_recurly(self) -> RecurlyError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RecurlyError */
/* -------------------------------------------------------------------------- */

impl IntoRecurlyError for HttpError {
    fn into_recurly(self) -> RecurlyError {
        // A builder error means the request itself was unusable; nothing hit
        // the network.
        if self.is_builder() {
            return RecurlyError::InvalidInput(format!("HTTP request rejected: {self}"));
        }

        // Everything else keeps the reqwest error as the source so callers can
        // inspect timeouts and connect failures directly.
        RecurlyError::transport(self)
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_recurly())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → RecurlyError */
/* -------------------------------------------------------------------------- */

impl IntoRecurlyError for std::io::Error {
    fn into_recurly(self) -> RecurlyError {
        RecurlyError::Config(format!("Failed to read config file: {self}"))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_recurly())
    }
}

/* -------------------------------------------------------------------------- */
/* Config file formats → RecurlyError */
/* -------------------------------------------------------------------------- */

impl IntoRecurlyError for TomlError {
    fn into_recurly(self) -> RecurlyError {
        RecurlyError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_recurly())
    }
}

impl IntoRecurlyError for JsonError {
    fn into_recurly(self) -> RecurlyError {
        RecurlyError::Config(format!("Invalid JSON format: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_recurly())
    }
}

impl IntoRecurlyError for XmlError {
    fn into_recurly(self) -> RecurlyError {
        RecurlyError::Config(format!("Invalid XML format: {self}"))
    }
}

impl From<XmlError> for InfraError {
    fn from(value: XmlError) -> Self {
        InfraError(value.into_recurly())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
