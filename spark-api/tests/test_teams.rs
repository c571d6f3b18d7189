//! Integration tests for team endpoints.

mod common;

use common::{mock_client, url};
use reqwest::Method;
use serde_json::json;
use spark_api::{TeamListParams, TeamUpdateParams};

#[tokio::test]
async fn team_crud_requests() {
    let (client, transport) = mock_client();
    transport
        .respond(200, r#"{"items":[{"id":"t1","name":"Core"}]}"#)
        .respond(200, r#"{"id":"t2","name":"Infra"}"#)
        .respond(200, r#"{"id":"t2","name":"Platform"}"#)
        .respond(204, "");

    let teams = client.teams().list(&TeamListParams { max: Some(5) }).await.unwrap();
    assert_eq!(teams[0].name.as_deref(), Some("Core"));

    let team = client.teams().create("Infra").await.unwrap();
    assert_eq!(team.id, "t2");

    client
        .teams()
        .update("t2", &TeamUpdateParams { name: "Platform".into() })
        .await
        .unwrap();
    client.teams().delete("t2").await.unwrap();

    let reqs = transport.requests();
    assert_eq!(reqs.len(), 4);
    assert_eq!(reqs[0].url, url("teams"));
    assert_eq!(reqs[0].query_param("max"), Some("5"));
    assert_eq!(reqs[1].body, Some(json!({ "name": "Infra" })));
    assert_eq!(reqs[2].url, url("teams/t2"));
    assert_eq!(reqs[3].method, Method::DELETE);
}

#[tokio::test]
async fn team_update_with_blank_id_sends_nothing() {
    let (client, transport) = mock_client();

    let err = client
        .teams()
        .update("", &TeamUpdateParams { name: "x".into() })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Team ID is missing or in the wrong format");
    assert_eq!(transport.request_count(), 0);
}
