//! Integration tests for room endpoints.

mod common;

use common::{mock_client, url};
use reqwest::Method;
use serde_json::json;
use spark_api::{RoomCreateParams, RoomListParams, RoomUpdateParams};

#[tokio::test]
async fn list_rooms_with_bare_team_id() {
    let (client, transport) = mock_client();
    transport.respond(
        200,
        r#"{"items":[{"id":"r1","title":"Ops","type":"group","teamId":"t1"},
                     {"id":"r2","title":"Dev","type":"group","teamId":"t1"}]}"#,
    );

    let rooms = client.rooms().list("t1").await.unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[1].title.as_deref(), Some("Dev"));

    let req = transport.only_request();
    assert_eq!(req.url, url("rooms"));
    assert_eq!(req.query, vec![("teamId".to_string(), "t1".to_string())]);
}

#[tokio::test]
async fn list_rooms_with_filters() {
    let (client, transport) = mock_client();
    transport.respond(200, r#"{"items":[]}"#);

    let params = RoomListParams {
        room_type: Some("direct".into()),
        sort_by: Some("lastactivity".into()),
        max: Some(20),
        ..Default::default()
    };
    client.rooms().list(params).await.unwrap();

    let req = transport.only_request();
    assert_eq!(req.query_param("type"), Some("direct"));
    assert_eq!(req.query_param("sortBy"), Some("lastactivity"));
    assert_eq!(req.query_param("max"), Some("20"));
    assert_eq!(req.query_param("teamId"), None);
}

#[tokio::test]
async fn create_room_from_title() {
    let (client, transport) = mock_client();
    transport.respond(200, r#"{"id":"r9","title":"Launch","type":"group"}"#);

    let room = client.rooms().create("Launch").await.unwrap();
    assert_eq!(room.id, "r9");

    let req = transport.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, url("rooms"));
    assert_eq!(req.body, Some(json!({ "title": "Launch" })));
}

#[tokio::test]
async fn create_room_in_team() {
    let (client, transport) = mock_client();
    transport.respond(200, r#"{"id":"r9","teamId":"t1"}"#);

    let params = RoomCreateParams {
        title: "Team room".into(),
        team_id: Some("t1".into()),
    };
    client.rooms().create(params).await.unwrap();
    assert_eq!(
        transport.only_request().body,
        Some(json!({ "title": "Team room", "teamId": "t1" }))
    );
}

#[tokio::test]
async fn create_room_without_title_sends_nothing() {
    let (client, transport) = mock_client();

    let err = client.rooms().create(RoomCreateParams::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid Params. Require title");
    assert!(err.is_validation());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn get_update_delete_room() {
    let (client, transport) = mock_client();
    transport
        .respond(200, r#"{"id":"r1","title":"Old"}"#)
        .respond(200, r#"{"id":"r1","title":"New"}"#)
        .respond(204, "");

    assert_eq!(client.rooms().get("r1").await.unwrap().title.as_deref(), Some("Old"));
    let updated = client
        .rooms()
        .update("r1", &RoomUpdateParams { title: "New".into() })
        .await
        .unwrap();
    assert_eq!(updated.title.as_deref(), Some("New"));
    client.rooms().delete("r1").await.unwrap();

    let reqs = transport.requests();
    let calls: Vec<_> = reqs.iter().map(|r| (r.method.clone(), r.url.clone())).collect();
    assert_eq!(
        calls,
        vec![
            (Method::GET, url("rooms/r1")),
            (Method::PUT, url("rooms/r1")),
            (Method::DELETE, url("rooms/r1")),
        ]
    );
    assert_eq!(reqs[1].body, Some(json!({ "title": "New" })));
}
