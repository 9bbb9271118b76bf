//! Failure classification
//!
//! Turns a non-success response into exactly one error value. The shape is
//! chosen by status alone: `422` yields validation errors, anything else an
//! API error. When the body does not parse, its raw text is kept as the
//! description so nothing the server said is lost.

use recurly_domain::{ApiError, RecurlyError, ValidationError, ValidationErrors};

use super::decode;

const VALIDATION_STATUS: u16 = 422;

pub fn classify(status: u16, body: &[u8]) -> RecurlyError {
    if status == VALIDATION_STATUS {
        RecurlyError::Validation(validation_errors(status, body))
    } else {
        RecurlyError::Api(api_error(status, body))
    }
}

fn raw_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).trim().to_string()
}

fn validation_errors(status: u16, body: &[u8]) -> ValidationErrors {
    match decode::<ValidationErrors>(body, "errors") {
        Ok(mut errors) => {
            errors.status = status;
            errors
        }
        Err(_) => ValidationErrors {
            status,
            errors: vec![ValidationError { description: raw_text(body), ..ValidationError::default() }],
        },
    }
}

fn api_error(status: u16, body: &[u8]) -> ApiError {
    match decode::<ApiError>(body, "error").ok() {
        Some(mut err) => {
            err.status = status;
            err
        }
        None => ApiError { status, description: raw_text(body), ..ApiError::default() },
    }
}
