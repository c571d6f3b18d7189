//! Transport seam between request shaping and the network.
//!
//! [`SparkClient`](crate::SparkClient) turns every operation into a fully
//! formed [`SparkRequest`] and hands it to a [`Transport`]. The default
//! transport is backed by reqwest; tests substitute their own.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Method};
use tracing::debug;

use spark_core::constants;
use spark_core::error::{SparkError, SparkResult};

/// A fully shaped HTTP request: URL, query string, headers and JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct SparkRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl SparkRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Look up a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    /// Value of the `TrackingID` response header.
    pub tracking_id: Option<String>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            tracking_id: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a [`SparkRequest`] and returns the raw response.
///
/// Implementations only fail for transport-level problems; non-2xx
/// statuses come back as a normal `RawResponse`.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: SparkRequest,
    ) -> impl Future<Output = SparkResult<RawResponse>> + Send;
}

/// Default transport backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout.
    pub fn new(timeout: Duration) -> SparkResult<Self> {
        let inner = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(15))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| SparkError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { inner })
    }

    /// Wrap an existing reqwest client.
    pub fn from_client(inner: Client) -> Self {
        Self { inner }
    }

    /// Classify a reqwest error into a SparkError variant.
    fn classify_error(e: reqwest::Error) -> SparkError {
        if e.is_timeout() {
            SparkError::Timeout(e.to_string())
        } else if e.is_connect() {
            SparkError::Http(format!("connection failed: {e}"))
        } else {
            SparkError::Http(e.to_string())
        }
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: SparkRequest) -> SparkResult<RawResponse> {
        let mut builder = self.inner.request(request.method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(Self::classify_error)?;
        let status = response.status().as_u16();
        let tracking_id = response
            .headers()
            .get(constants::TRACKING_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| SparkError::Http(format!("failed to read response body: {e}")))?;

        debug!("received {status} ({} bytes)", body.len());
        Ok(RawResponse {
            status,
            body,
            tracking_id,
        })
    }
}
