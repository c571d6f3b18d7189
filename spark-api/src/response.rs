//! Response envelopes.
//!
//! Collection endpoints wrap their results in `{ "items": [...] }`. Error
//! responses carry a message, optional per-field errors and a tracking id.

use serde::{Deserialize, Serialize};

/// Envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T = serde_json::Value> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Body of a non-success response.
///
/// ```json
/// { "message": "Unable to post message", "errors": [{ "description": "..." }],
///   "trackingId": "ROUTER_5C1A..." }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
    #[serde(default)]
    pub tracking_id: Option<String>,
}

/// A single entry of `ErrorBody::errors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub description: Option<String>,
}

impl ErrorBody {
    /// The most specific human-readable message in the body.
    pub fn error_message(&self) -> Option<String> {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .or_else(|| {
                self.errors
                    .iter()
                    .find_map(|e| e.description.clone().filter(|d| !d.is_empty()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_items() {
        let json = r#"{"items":[{"id":"a"},{"id":"b"}]}"#;
        let resp: ListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items.len(), 2);
    }

    #[test]
    fn test_list_response_missing_items() {
        let resp: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn test_error_body_prefers_message() {
        let json = r#"{"message":"Unable to post","errors":[{"description":"room not found"}],"trackingId":"T-1"}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error_message().unwrap(), "Unable to post");
        assert_eq!(body.tracking_id.as_deref(), Some("T-1"));
    }

    #[test]
    fn test_error_body_falls_back_to_description() {
        let json = r#"{"errors":[{"description":"title is required"}]}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error_message().unwrap(), "title is required");
    }
}
