//! Error types used throughout the client
//!
//! Every failed call yields exactly one [`RecurlyError`]. HTTP failures are
//! split by status code: `422` becomes [`RecurlyError::Validation`], every
//! other status at or above `400` becomes [`RecurlyError::Api`].

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Symbol used for the local "record already exists" precondition failure.
pub const ALREADY_EXISTS_SYMBOL: &str = "already_exists";

/// Status code reported for local precondition failures.
pub const ALREADY_EXISTS_STATUS: u16 = 400;

/// Main error type for the Recurly client
#[derive(Error, Debug)]
pub enum RecurlyError {
    /// Server-reported failure (any status >= 400 except 422), or a local
    /// precondition failure shaped like one.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Field-level validation failures (status 422).
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A success response whose body could not be decoded.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A payload could not be encoded.
    #[error("Encoding error: {0}")]
    Encode(String),

    /// Caller supplied something the client cannot act on.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RecurlyError {
    /// Wrap any transport-level failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }

    /// HTTP status associated with the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::Validation(errs) => Some(errs.status),
            _ => None,
        }
    }

    /// True for the local "already exists" precondition failure.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::Api(err) if err.symbol == ALREADY_EXISTS_SYMBOL)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Server error document (`<error>`), plus the status it arrived with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "error")]
pub struct ApiError {
    #[serde(skip)]
    pub status: u16,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: String,
}

impl ApiError {
    pub fn new(status: u16, symbol: impl Into<String>, description: impl Into<String>) -> Self {
        Self { status, symbol: symbol.into(), description: description.into(), details: String::new() }
    }

    /// Local precondition failure: the record is already persisted.
    pub fn already_exists(description: impl Into<String>) -> Self {
        Self::new(ALREADY_EXISTS_STATUS, ALREADY_EXISTS_SYMBOL, description)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {} Status Code: {}",
            self.symbol, self.description, self.details, self.status
        )
    }
}

impl std::error::Error for ApiError {}

/// One field-level validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationError {
    #[serde(rename = "@field", default)]
    pub field: String,
    #[serde(rename = "@symbol", default)]
    pub symbol: String,
    #[serde(rename = "$text", default)]
    pub description: String,
}

/// Validation error document (`<errors>`), plus the status it arrived with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "errors")]
pub struct ValidationErrors {
    #[serde(skip)]
    pub status: u16,
    #[serde(rename = "error", default)]
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// First failure reported against `field`.
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "You have the following validation errors:")?;
        for err in &self.errors {
            writeln!(f, "{} {}", err.field, err.description)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, RecurlyError>;
