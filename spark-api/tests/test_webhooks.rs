//! Integration tests for webhook endpoints.

mod common;

use common::{mock_client, url};
use reqwest::Method;
use serde_json::json;
use spark_api::{WebhookCreateParams, WebhookListParams, WebhookUpdateParams};

#[tokio::test]
async fn webhook_crud_requests() {
    let (client, transport) = mock_client();
    transport
        .respond(200, r#"{"items":[{"id":"w1","status":"active"}]}"#)
        .respond(200, r#"{"id":"w2","name":"bot","targetUrl":"https://example.com/hook"}"#)
        .respond(200, r#"{"id":"w2","status":"inactive"}"#)
        .respond(204, "");

    let hooks = client
        .webhooks()
        .list(&WebhookListParams::default())
        .await
        .unwrap();
    assert_eq!(hooks[0].status.as_deref(), Some("active"));

    let created = client
        .webhooks()
        .create(&WebhookCreateParams {
            name: "bot".into(),
            target_url: "https://example.com/hook".into(),
            resource: "messages".into(),
            event: "created".into(),
            filter: None,
            secret: Some("s3cret".into()),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "w2");

    client
        .webhooks()
        .update(
            "w2",
            &WebhookUpdateParams {
                name: "bot".into(),
                target_url: "https://example.com/hook".into(),
                secret: None,
                status: Some("inactive".into()),
            },
        )
        .await
        .unwrap();
    client.webhooks().delete("w2").await.unwrap();

    let reqs = transport.requests();
    assert_eq!(reqs[0].url, url("webhooks"));
    assert!(reqs[0].query.is_empty());
    assert_eq!(
        reqs[1].body,
        Some(json!({
            "name": "bot",
            "targetUrl": "https://example.com/hook",
            "resource": "messages",
            "event": "created",
            "secret": "s3cret"
        }))
    );
    assert_eq!(reqs[2].method, Method::PUT);
    assert_eq!(reqs[2].body.as_ref().unwrap()["status"], "inactive");
    assert_eq!(reqs[3].url, url("webhooks/w2"));
}

#[tokio::test]
async fn webhook_server_error_carries_tracking_id() {
    let (client, transport) = mock_client();
    transport.respond(
        400,
        r#"{"message":"targetUrl is invalid","trackingId":"ROUTER_123"}"#,
    );

    let err = client.webhooks().get("w1").await.unwrap_err();
    match err {
        spark_core::error::SparkError::Api { status, message, tracking_id } => {
            assert_eq!(status, 400);
            assert_eq!(message, "targetUrl is invalid");
            assert_eq!(tracking_id.as_deref(), Some("ROUTER_123"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
