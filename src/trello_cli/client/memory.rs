use super::{Method, Request, Response, Transport};
use crate::error::Result;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// In-memory transport for testing.
///
/// Responses are queued per `(method, path)` and handed out in order. Every
/// request is recorded so tests can assert on what was sent. A request with
/// no queued response gets a 404, the same as an unknown Trello route.
///
/// Uses `RefCell` since the CLI is single-threaded and `Transport::send`
/// takes `&self`.
#[derive(Default)]
pub struct MemoryTransport {
    responses: RefCell<HashMap<(Method, String), VecDeque<Response>>>,
    requests: RefCell<Vec<Request>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(
        self,
        method: Method,
        path: &str,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.push_response(method, path, status, body);
        self
    }

    pub fn push_response(&self, method: Method, path: &str, status: u16, body: impl Into<String>) {
        self.responses
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Response::new(status, body));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<Request> {
        self.requests.borrow().last().cloned()
    }
}

impl Transport for MemoryTransport {
    fn send(&self, request: &Request) -> Result<Response> {
        self.requests.borrow_mut().push(request.clone());
        let canned = self
            .responses
            .borrow_mut()
            .get_mut(&(request.method, request.path.clone()))
            .and_then(VecDeque::pop_front);

        Ok(canned.unwrap_or_else(|| {
            Response::new(
                404,
                format!("no canned response for {} {}", request.method, request.path),
            )
        }))
    }
}
