use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// In-memory Transport for tests: replays queued responses in order and
/// records every request it receives.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub fn fail(&self, error: ApiError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport(format!("no response queued for {url}"))))
    }
}
