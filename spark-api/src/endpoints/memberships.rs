//! Room membership endpoints.

use serde::Serialize;
use spark_core::error::{SparkError, SparkResult};

use crate::client::{present, Resource, SparkClient};
use crate::models::Membership;
use crate::transport::{ReqwestTransport, Transport};

/// Filters for listing memberships. A bare string is taken as the room id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl From<&str> for MembershipListParams {
    fn from(room_id: &str) -> Self {
        Self {
            room_id: Some(room_id.to_string()),
            ..Self::default()
        }
    }
}

impl From<String> for MembershipListParams {
    fn from(room_id: String) -> Self {
        Self {
            room_id: Some(room_id),
            ..Self::default()
        }
    }
}

/// Body for adding a person to a room.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipCreateParams {
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
}

impl MembershipCreateParams {
    pub fn by_person_id(room_id: impl Into<String>, person_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            person_id: Some(person_id.into()),
            ..Self::default()
        }
    }

    pub fn by_email(room_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            person_email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Room first, then person.
    pub fn validate(&self) -> SparkResult<()> {
        if self.room_id.trim().is_empty() {
            return Err(SparkError::InvalidParams("Invalid params. Require roomId".into()));
        }
        if !present(&self.person_id) && !present(&self.person_email) {
            return Err(SparkError::InvalidParams(
                "Invalid params. Require personId or personEmail".into(),
            ));
        }
        Ok(())
    }
}

/// Body for changing a membership.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipUpdateParams {
    pub is_moderator: bool,
}

/// Handle for `/memberships`.
pub struct Memberships<'a, T = ReqwestTransport> {
    client: &'a SparkClient<T>,
}

impl<'a, T: Transport> Memberships<'a, T> {
    pub fn new(client: &'a SparkClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: impl Into<MembershipListParams>,
    ) -> SparkResult<Vec<Membership>> {
        let params = params.into();
        self.client.list(&Resource::MEMBERSHIPS, &params).await
    }

    /// Add a person to a room by id or email.
    pub async fn create(&self, params: &MembershipCreateParams) -> SparkResult<Membership> {
        params.validate()?;
        self.client.create(&Resource::MEMBERSHIPS, params).await
    }

    pub async fn get(&self, membership_id: &str) -> SparkResult<Membership> {
        self.client.get(&Resource::MEMBERSHIPS, membership_id).await
    }

    pub async fn update(
        &self,
        membership_id: &str,
        params: &MembershipUpdateParams,
    ) -> SparkResult<Membership> {
        self.client
            .update(&Resource::MEMBERSHIPS, membership_id, params)
            .await
    }

    pub async fn delete(&self, membership_id: &str) -> SparkResult<()> {
        self.client.delete(&Resource::MEMBERSHIPS, membership_id).await
    }
}

impl<T: Transport> SparkClient<T> {
    /// Room membership operations.
    pub fn memberships(&self) -> Memberships<'_, T> {
        Memberships::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_is_room_filter() {
        let params: MembershipListParams = "room-9".into();
        assert_eq!(params.room_id.as_deref(), Some("room-9"));
        assert!(params.person_email.is_none());
    }

    #[test]
    fn test_validate_checks_room_before_person() {
        let err = MembershipCreateParams::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid params. Require roomId");

        let params = MembershipCreateParams {
            room_id: "r".into(),
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid params. Require personId or personEmail");

        assert!(MembershipCreateParams::by_email("r", "a@example.com").validate().is_ok());
        assert!(MembershipCreateParams::by_person_id("r", "p").validate().is_ok());
    }

    #[test]
    fn test_whitespace_only_values_count_as_missing() {
        let err = MembershipCreateParams::by_email(" ", "a@example.com")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid params. Require roomId");

        let err = MembershipCreateParams::by_email("r", "  ").validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid params. Require personId or personEmail");
    }

    #[test]
    fn test_update_body() {
        let json = serde_json::to_value(MembershipUpdateParams { is_moderator: true }).unwrap();
        assert_eq!(json, serde_json::json!({ "isModerator": true }));
    }
}
