//! Request batching.
//!
//! A `RequestBatch` is a plain value that accumulates queued requests and is
//! handed to [`SimwoodClient::run`](crate::SimwoodClient::run), which
//! consumes it. Building a batch has no network effect.

use std::collections::HashMap;

/// A single queued request: the remote operation tag plus its parameters.
///
/// `token` and `output` are merged in at execution time, not here.
#[derive(Debug, Clone)]
pub struct QueuedRequest {
    pub mode: String,
    pub params: HashMap<String, String>,
}

/// An ordered batch of requests, built by chaining [`enqueue`](Self::enqueue).
#[derive(Debug, Clone, Default)]
pub struct RequestBatch {
    requests: Vec<QueuedRequest>,
}

impl RequestBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request for `mode` with the given parameters.
    ///
    /// Takes and returns the batch by value so calls chain without shared
    /// mutable state.
    pub fn enqueue(
        mut self,
        mode: impl Into<String>,
        params: HashMap<String, String>,
    ) -> Self {
        self.requests.push(QueuedRequest {
            mode: mode.into(),
            params,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub(crate) fn into_requests(self) -> Vec<QueuedRequest> {
        self.requests
    }
}
