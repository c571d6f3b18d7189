//! Team membership endpoints.

use serde::Serialize;
use spark_core::error::{SparkError, SparkResult};

use crate::client::{present, Resource, SparkClient};
use crate::models::TeamMembership;
use crate::transport::{ReqwestTransport, Transport};

/// Filters for listing team memberships. A bare string is taken as the team id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembershipListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl From<&str> for TeamMembershipListParams {
    fn from(team_id: &str) -> Self {
        Self {
            team_id: Some(team_id.to_string()),
            max: None,
        }
    }
}

impl From<String> for TeamMembershipListParams {
    fn from(team_id: String) -> Self {
        Self {
            team_id: Some(team_id),
            max: None,
        }
    }
}

/// Body for adding a person to a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembershipCreateParams {
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
}

impl TeamMembershipCreateParams {
    pub fn by_person_id(team_id: impl Into<String>, person_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            person_id: Some(person_id.into()),
            ..Self::default()
        }
    }

    pub fn by_email(team_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            person_email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SparkResult<()> {
        if self.team_id.trim().is_empty() {
            return Err(SparkError::InvalidParams("Invalid params. Require teamId".into()));
        }
        if !present(&self.person_id) && !present(&self.person_email) {
            return Err(SparkError::InvalidParams(
                "Invalid params. Require personId or personEmail".into(),
            ));
        }
        Ok(())
    }
}

/// Body for changing a team membership.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembershipUpdateParams {
    pub is_moderator: bool,
}

/// Handle for `/team/memberships`.
pub struct TeamMemberships<'a, T = ReqwestTransport> {
    client: &'a SparkClient<T>,
}

impl<'a, T: Transport> TeamMemberships<'a, T> {
    pub fn new(client: &'a SparkClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: impl Into<TeamMembershipListParams>,
    ) -> SparkResult<Vec<TeamMembership>> {
        let params = params.into();
        self.client.list(&Resource::TEAM_MEMBERSHIPS, &params).await
    }

    pub async fn create(
        &self,
        params: &TeamMembershipCreateParams,
    ) -> SparkResult<TeamMembership> {
        params.validate()?;
        self.client.create(&Resource::TEAM_MEMBERSHIPS, params).await
    }

    pub async fn get(&self, membership_id: &str) -> SparkResult<TeamMembership> {
        self.client.get(&Resource::TEAM_MEMBERSHIPS, membership_id).await
    }

    pub async fn update(
        &self,
        membership_id: &str,
        params: &TeamMembershipUpdateParams,
    ) -> SparkResult<TeamMembership> {
        self.client
            .update(&Resource::TEAM_MEMBERSHIPS, membership_id, params)
            .await
    }

    pub async fn delete(&self, membership_id: &str) -> SparkResult<()> {
        self.client
            .delete(&Resource::TEAM_MEMBERSHIPS, membership_id)
            .await
    }
}

impl<T: Transport> SparkClient<T> {
    /// Team membership operations.
    pub fn team_memberships(&self) -> TeamMemberships<'_, T> {
        TeamMemberships::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_is_team_filter() {
        let params: TeamMembershipListParams = String::from("team-3").into();
        assert_eq!(params.team_id.as_deref(), Some("team-3"));
    }

    #[test]
    fn test_validate_order() {
        let params = TeamMembershipCreateParams {
            person_email: Some("a@example.com".into()),
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap_err().to_string(),
            "Invalid params. Require teamId"
        );

        let params = TeamMembershipCreateParams {
            team_id: "t".into(),
            person_id: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap_err().to_string(),
            "Invalid params. Require personId or personEmail"
        );

        assert!(TeamMembershipCreateParams::by_person_id("t", "p").validate().is_ok());
    }
}
