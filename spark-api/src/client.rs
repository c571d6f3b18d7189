//! Shared request helper for every Spark resource.
//!
//! Handles authentication, header injection, URL templating, query and body
//! construction, and status-code mapping. Resource modules only validate
//! their parameters and call the generic CRUD helpers defined here.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use spark_core::config::{ApiConfig, AppConfig};
use spark_core::constants::paths;
use spark_core::error::{SparkError, SparkResult};

use crate::response::{ErrorBody, ListResponse};
use crate::transport::{RawResponse, ReqwestTransport, SparkRequest, Transport};

/// A REST collection: its path under the API root and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Path relative to the base URL, e.g. "team/memberships".
    pub path: &'static str,
    /// Singular display name used in error messages.
    pub label: &'static str,
}

impl Resource {
    pub const ROOMS: Resource = Resource {
        path: paths::ROOMS,
        label: "Room",
    };
    pub const MESSAGES: Resource = Resource {
        path: paths::MESSAGES,
        label: "Message",
    };
    pub const MEMBERSHIPS: Resource = Resource {
        path: paths::MEMBERSHIPS,
        label: "Membership",
    };
    pub const TEAM_MEMBERSHIPS: Resource = Resource {
        path: paths::TEAM_MEMBERSHIPS,
        label: "Team Membership",
    };
    pub const TEAMS: Resource = Resource {
        path: paths::TEAMS,
        label: "Team",
    };
    pub const WEBHOOKS: Resource = Resource {
        path: paths::WEBHOOKS,
        label: "Webhook",
    };

    /// Reject a missing or blank identifier before any request is made.
    pub fn check_id<'a>(&self, id: &'a str) -> SparkResult<&'a str> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(SparkError::InvalidParams(format!(
                "{} ID is missing or in the wrong format",
                self.label
            )));
        }
        Ok(trimmed)
    }
}

/// HTTP client for the Spark REST API.
///
/// Generic over the [`Transport`] so request shaping can be exercised
/// without a network; production code uses [`ReqwestTransport`].
#[derive(Clone)]
pub struct SparkClient<T = ReqwestTransport> {
    transport: T,
    /// API root without a trailing slash.
    base_url: String,
    access_token: String,
    user_agent: String,
    custom_headers: Vec<(String, String)>,
}

impl SparkClient<ReqwestTransport> {
    /// Create a client backed by reqwest.
    pub fn new(config: &ApiConfig) -> SparkResult<Self> {
        let transport = ReqwestTransport::new(Duration::from_millis(config.timeout_ms))?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> SparkClient<T> {
    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: &ApiConfig, transport: T) -> Self {
        let mut custom_headers: Vec<(String, String)> = config
            .custom_headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        custom_headers.sort();

        Self {
            transport,
            base_url: AppConfig::sanitize_base_url(&config.base_url),
            access_token: config.access_token.trim().to_string(),
            user_agent: config.user_agent.clone(),
            custom_headers,
        }
    }

    /// The API root every resource path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build `<base>/<resource>[/<id>][/<suffix>]`, percent-encoding the id.
    pub fn url(
        &self,
        resource: &Resource,
        id: Option<&str>,
        suffix: Option<&str>,
    ) -> SparkResult<String> {
        let raw = format!("{}/{}", self.base_url, resource.path);
        let mut url = Url::parse(&raw)
            .map_err(|e| SparkError::Config(format!("invalid base url {raw}: {e}")))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| SparkError::Config(format!("base url cannot hold a path: {raw}")))?;
            if let Some(id) = id {
                segments.push(id);
            }
            if let Some(suffix) = suffix {
                segments.push(suffix);
            }
        }
        Ok(url.to_string())
    }

    /// Headers attached to every request.
    ///
    /// A configured custom header replaces a built-in one of the same name
    /// (case-insensitive), so each name is sent once.
    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            (
                AUTHORIZATION.as_str().to_string(),
                format!("Bearer {}", self.access_token),
            ),
            (USER_AGENT.as_str().to_string(), self.user_agent.clone()),
            (ACCEPT.as_str().to_string(), "application/json".to_string()),
        ];
        for (name, value) in &self.custom_headers {
            match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
                Some(existing) => existing.1 = value.clone(),
                None => headers.push((name.clone(), value.clone())),
            }
        }
        headers
    }

    /// Send one request and decode the JSON response.
    ///
    /// Fails with `MissingAccessToken` before touching the transport when
    /// no token is configured. An empty success body decodes to `null`.
    pub async fn request(
        &self,
        method: Method,
        url: String,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> SparkResult<Value> {
        if self.access_token.is_empty() {
            return Err(SparkError::MissingAccessToken);
        }

        let request = SparkRequest {
            method,
            url,
            query,
            headers: self.headers(),
            body,
        };
        debug!("{} {}", request.method, request.url);

        let response = self.transport.execute(request).await?;
        Self::decode(response)
    }

    /// Map a raw response to a JSON value or a SparkError.
    fn decode(response: RawResponse) -> SparkResult<Value> {
        let status = response.status;

        if response.is_success() {
            if response.body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&response.body)
                .map_err(|e| SparkError::Serialization(format!("failed to parse response: {e}")));
        }

        let body: Option<ErrorBody> = serde_json::from_str(&response.body).ok();
        let message = body
            .as_ref()
            .and_then(ErrorBody::error_message)
            .unwrap_or_else(|| format!("server returned {status}"));
        let tracking_id = response
            .tracking_id
            .or_else(|| body.and_then(|b| b.tracking_id));

        warn!(
            "request failed with status {status}: {message} (tracking id: {})",
            tracking_id.as_deref().unwrap_or("none")
        );

        match status {
            401 | 403 => Err(SparkError::AuthFailed(message)),
            404 => Err(SparkError::NotFound(message)),
            _ => Err(SparkError::Api {
                status,
                message,
                tracking_id,
            }),
        }
    }

    // --- Generic CRUD ---

    /// GET the collection, with `params` as the query string.
    pub async fn list<R, P>(&self, resource: &Resource, params: &P) -> SparkResult<Vec<R>>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = self.url(resource, None, None)?;
        let value = self.request(Method::GET, url, query_pairs(params)?, None).await?;
        let list: ListResponse<R> = from_value(value)?;
        Ok(list.items)
    }

    /// GET a single entity by id.
    pub async fn get<R: DeserializeOwned>(&self, resource: &Resource, id: &str) -> SparkResult<R> {
        let id = resource.check_id(id)?;
        let url = self.url(resource, Some(id), None)?;
        from_value(self.request(Method::GET, url, Vec::new(), None).await?)
    }

    /// POST a new entity.
    pub async fn create<R, B>(&self, resource: &Resource, body: &B) -> SparkResult<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(resource, None, None)?;
        let body = serde_json::to_value(body)?;
        from_value(self.request(Method::POST, url, Vec::new(), Some(body)).await?)
    }

    /// PUT an updated entity by id.
    pub async fn update<R, B>(&self, resource: &Resource, id: &str, body: &B) -> SparkResult<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let id = resource.check_id(id)?;
        let url = self.url(resource, Some(id), None)?;
        let body = serde_json::to_value(body)?;
        from_value(self.request(Method::PUT, url, Vec::new(), Some(body)).await?)
    }

    /// DELETE an entity by id.
    pub async fn delete(&self, resource: &Resource, id: &str) -> SparkResult<()> {
        let id = resource.check_id(id)?;
        let url = self.url(resource, Some(id), None)?;
        self.request(Method::DELETE, url, Vec::new(), None).await?;
        Ok(())
    }
}

/// Deserialize a decoded response value into a typed model.
pub(crate) fn from_value<R: DeserializeOwned>(value: Value) -> SparkResult<R> {
    serde_json::from_value(value)
        .map_err(|e| SparkError::Serialization(format!("unexpected response shape: {e}")))
}

/// Flatten a params struct into query pairs.
///
/// Null fields are dropped, scalars are stringified and arrays are
/// comma-joined.
pub fn query_pairs<P: Serialize + ?Sized>(params: &P) -> SparkResult<Vec<(String, String)>> {
    match serde_json::to_value(params)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(k, v)| query_value(v).map(|v| (k, v)))
            .collect()),
        other => Err(SparkError::Serialization(format!(
            "query parameters must be an object, got {other}"
        ))),
    }
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(query_value).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(","))
            }
        }
        other @ Value::Object(_) => Some(other.to_string()),
    }
}

/// True when an optional string field carries a non-blank value.
pub(crate) fn present(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false)
}
