//! Transport that replays queued responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use recurly_core::{HttpRequest, HttpResponse, Transport};
use recurly_domain::{RecurlyError, Result};

/// Replays queued outcomes in order and records each request it receives.
///
/// Clones share state, so a test can keep a handle while the client owns
/// another.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    outcomes: Arc<Mutex<VecDeque<Result<HttpResponse>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and `body`.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse::new(status, body)))
    }

    pub fn respond_with(self, response: HttpResponse) -> Self {
        self.push(Ok(response))
    }

    /// Queue a failure that never produced a response.
    pub fn fail(self, message: &str) -> Self {
        let err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, message.to_string());
        self.push(Err(RecurlyError::transport(err)))
    }

    fn push(self, outcome: Result<HttpResponse>) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request was sent")
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: no response queued"))
    }
}
