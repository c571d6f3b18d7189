//! Webhook endpoints.

use serde::Serialize;
use spark_core::error::SparkResult;

use crate::client::{Resource, SparkClient};
use crate::models::Webhook;
use crate::transport::{ReqwestTransport, Transport};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WebhookListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Body for registering a webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCreateParams {
    pub name: String,
    pub target_url: String,
    /// e.g. "messages", "memberships", "rooms" or "all".
    pub resource: String,
    /// e.g. "created", "updated", "deleted" or "all".
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Body for changing a webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookUpdateParams {
    pub name: String,
    pub target_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// "active" or "inactive".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Handle for `/webhooks`.
pub struct Webhooks<'a, T = ReqwestTransport> {
    client: &'a SparkClient<T>,
}

impl<'a, T: Transport> Webhooks<'a, T> {
    pub fn new(client: &'a SparkClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &WebhookListParams) -> SparkResult<Vec<Webhook>> {
        self.client.list(&Resource::WEBHOOKS, params).await
    }

    pub async fn create(&self, params: &WebhookCreateParams) -> SparkResult<Webhook> {
        self.client.create(&Resource::WEBHOOKS, params).await
    }

    pub async fn get(&self, webhook_id: &str) -> SparkResult<Webhook> {
        self.client.get(&Resource::WEBHOOKS, webhook_id).await
    }

    pub async fn update(
        &self,
        webhook_id: &str,
        params: &WebhookUpdateParams,
    ) -> SparkResult<Webhook> {
        self.client.update(&Resource::WEBHOOKS, webhook_id, params).await
    }

    pub async fn delete(&self, webhook_id: &str) -> SparkResult<()> {
        self.client.delete(&Resource::WEBHOOKS, webhook_id).await
    }
}

impl<T: Transport> SparkClient<T> {
    /// Webhook operations.
    pub fn webhooks(&self) -> Webhooks<'_, T> {
        Webhooks::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_shape() {
        let params = WebhookCreateParams {
            name: "new messages".into(),
            target_url: "https://example.com/hook".into(),
            resource: "messages".into(),
            event: "created".into(),
            filter: Some("roomId=abc".into()),
            secret: None,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["targetUrl"], "https://example.com/hook");
        assert_eq!(json["filter"], "roomId=abc");
        assert!(json.get("secret").is_none());
    }
}
