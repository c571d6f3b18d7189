//! Resource models returned by the REST API.
//!
//! Field names follow the API's camelCase JSON; unknown fields are ignored
//! so newer server versions keep deserializing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A conversation space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// "direct" or "group".
    #[serde(rename = "type", default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub is_locked: Option<bool>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Room {
    pub fn is_direct(&self) -> bool {
        self.room_type.as_deref() == Some("direct")
    }
}

/// A message posted to a room or directly to a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub to_person_id: Option<String>,
    #[serde(default)]
    pub to_person_email: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub person_id: Option<String>,
    #[serde(default)]
    pub person_email: Option<String>,
    #[serde(default)]
    pub mentioned_people: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// A person's membership in a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: String,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub person_id: Option<String>,
    #[serde(default)]
    pub person_email: Option<String>,
    #[serde(default)]
    pub person_display_name: Option<String>,
    #[serde(default)]
    pub person_org_id: Option<String>,
    #[serde(default)]
    pub is_moderator: bool,
    #[serde(default)]
    pub is_monitor: bool,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// A person's membership in a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembership {
    pub id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub person_id: Option<String>,
    #[serde(default)]
    pub person_email: Option<String>,
    #[serde(default)]
    pub person_display_name: Option<String>,
    #[serde(default)]
    pub person_org_id: Option<String>,
    #[serde(default)]
    pub is_moderator: bool,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// A group of rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// A server-side event subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub target_url: Option<String>,
    /// Resource being watched, e.g. "messages".
    #[serde(default)]
    pub resource: Option<String>,
    /// Event being watched, e.g. "created".
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
    /// "active" or "inactive".
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_deserialize() {
        let json = r#"{
            "id": "Y2lzY29zcGFyazovL3VzL1JPT00vYmJjZWIxYWQ",
            "title": "Project Unicorn",
            "type": "group",
            "isLocked": true,
            "teamId": "Y2lzY29zcGFyazovL3VzL1RFQU0v",
            "lastActivity": "2016-04-21T19:12:48.920Z",
            "created": "2016-04-21T19:01:55.966Z",
            "someNewField": 1
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.title.as_deref(), Some("Project Unicorn"));
        assert_eq!(room.is_locked, Some(true));
        assert!(!room.is_direct());
        assert!(room.created.is_some());
    }

    #[test]
    fn test_message_defaults() {
        let message: Message = serde_json::from_str(r#"{"id":"m1","text":"hi"}"#).unwrap();
        assert!(message.files.is_empty());
        assert!(message.mentioned_people.is_empty());
        assert_eq!(message.text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_membership_flags_default_false() {
        let m: Membership =
            serde_json::from_str(r#"{"id":"x","roomId":"r","personEmail":"a@b.c"}"#).unwrap();
        assert!(!m.is_moderator);
        assert!(!m.is_monitor);
        assert_eq!(m.person_email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_webhook_deserialize() {
        let json = r#"{"id":"w1","name":"hook","targetUrl":"https://example.com/hook",
            "resource":"messages","event":"created","filter":"roomId=abc","status":"active"}"#;
        let hook: Webhook = serde_json::from_str(json).unwrap();
        assert_eq!(hook.target_url.as_deref(), Some("https://example.com/hook"));
        assert_eq!(hook.filter.as_deref(), Some("roomId=abc"));
    }
}
