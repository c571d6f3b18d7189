//! Room endpoints.

use serde::Serialize;
use spark_core::error::{SparkError, SparkResult};

use crate::client::{Resource, SparkClient};
use crate::models::Room;
use crate::transport::{ReqwestTransport, Transport};

/// Filters for listing rooms. A bare string is taken as the team id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    /// "direct" or "group".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    /// "id", "lastactivity" or "created".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl From<&str> for RoomListParams {
    fn from(team_id: &str) -> Self {
        Self {
            team_id: Some(team_id.to_string()),
            ..Self::default()
        }
    }
}

impl From<String> for RoomListParams {
    fn from(team_id: String) -> Self {
        Self {
            team_id: Some(team_id),
            ..Self::default()
        }
    }
}

/// Parameters for creating a room. A bare string is taken as the title.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreateParams {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl RoomCreateParams {
    pub fn validate(&self) -> SparkResult<()> {
        if self.title.trim().is_empty() {
            return Err(SparkError::InvalidParams("Invalid Params. Require title".into()));
        }
        Ok(())
    }
}

impl From<&str> for RoomCreateParams {
    fn from(title: &str) -> Self {
        Self {
            title: title.to_string(),
            team_id: None,
        }
    }
}

impl From<String> for RoomCreateParams {
    fn from(title: String) -> Self {
        Self {
            title,
            team_id: None,
        }
    }
}

/// Parameters for renaming a room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomUpdateParams {
    pub title: String,
}

/// Handle for `/rooms`.
pub struct Rooms<'a, T = ReqwestTransport> {
    client: &'a SparkClient<T>,
}

impl<'a, T: Transport> Rooms<'a, T> {
    pub fn new(client: &'a SparkClient<T>) -> Self {
        Self { client }
    }

    /// List rooms, optionally restricted to a team.
    pub async fn list(&self, params: impl Into<RoomListParams>) -> SparkResult<Vec<Room>> {
        let params = params.into();
        self.client.list(&Resource::ROOMS, &params).await
    }

    /// Create a room. Fails locally when the title is blank.
    pub async fn create(&self, params: impl Into<RoomCreateParams>) -> SparkResult<Room> {
        let params = params.into();
        params.validate()?;
        self.client.create(&Resource::ROOMS, &params).await
    }

    pub async fn get(&self, room_id: &str) -> SparkResult<Room> {
        self.client.get(&Resource::ROOMS, room_id).await
    }

    pub async fn update(&self, room_id: &str, params: &RoomUpdateParams) -> SparkResult<Room> {
        self.client.update(&Resource::ROOMS, room_id, params).await
    }

    pub async fn delete(&self, room_id: &str) -> SparkResult<()> {
        self.client.delete(&Resource::ROOMS, room_id).await
    }
}

impl<T: Transport> SparkClient<T> {
    /// Room operations.
    pub fn rooms(&self) -> Rooms<'_, T> {
        Rooms::new(self)
    }
}
