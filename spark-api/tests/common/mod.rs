//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use spark_api::{RawResponse, SparkClient, SparkRequest, Transport};
use spark_core::config::ApiConfig;
use spark_core::error::{SparkError, SparkResult};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_BASE: &str = "https://api.example.test/v1";

/// Transport that records every request and replays canned responses.
///
/// When the queue is empty it answers `200 {}`.
#[derive(Clone, Default)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<SparkRequest>>>,
    responses: Arc<Mutex<VecDeque<SparkResult<RawResponse>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    /// Queue a transport-level failure.
    pub fn fail(&self, err: SparkError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<SparkRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The single request sent so far. Panics if there were zero or several.
    pub fn only_request(&self) -> SparkRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: SparkRequest) -> SparkResult<RawResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::new(200, "{}")))
    }
}

/// API config pointing at a fake host with a test token.
pub fn test_config() -> ApiConfig {
    let mut config = ApiConfig::with_token(TEST_TOKEN);
    config.base_url = TEST_BASE.to_string();
    config.user_agent = "spark-tests/1.0".to_string();
    config
}

/// Client wired to a fresh mock transport. The transport handle shares
/// state with the one inside the client.
pub fn mock_client() -> (SparkClient<MockTransport>, MockTransport) {
    spark_core::logging::init_console_logging("spark_api=debug");
    let transport = MockTransport::new();
    let client = SparkClient::with_transport(&test_config(), transport.clone());
    (client, transport)
}

pub fn url(path: &str) -> String {
    format!("{TEST_BASE}/{path}")
}
