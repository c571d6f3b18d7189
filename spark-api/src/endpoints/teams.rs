//! Team endpoints. No local validation beyond the id checks shared by
//! every resource.

use serde::Serialize;
use spark_core::error::SparkResult;

use crate::client::{Resource, SparkClient};
use crate::models::Team;
use crate::transport::{ReqwestTransport, Transport};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamCreateParams {
    pub name: String,
}

impl From<&str> for TeamCreateParams {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamUpdateParams {
    pub name: String,
}

/// Handle for `/teams`.
pub struct Teams<'a, T = ReqwestTransport> {
    client: &'a SparkClient<T>,
}

impl<'a, T: Transport> Teams<'a, T> {
    pub fn new(client: &'a SparkClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &TeamListParams) -> SparkResult<Vec<Team>> {
        self.client.list(&Resource::TEAMS, params).await
    }

    pub async fn create(&self, params: impl Into<TeamCreateParams>) -> SparkResult<Team> {
        let params = params.into();
        self.client.create(&Resource::TEAMS, &params).await
    }

    pub async fn get(&self, team_id: &str) -> SparkResult<Team> {
        self.client.get(&Resource::TEAMS, team_id).await
    }

    pub async fn update(&self, team_id: &str, params: &TeamUpdateParams) -> SparkResult<Team> {
        self.client.update(&Resource::TEAMS, team_id, params).await
    }

    pub async fn delete(&self, team_id: &str) -> SparkResult<()> {
        self.client.delete(&Resource::TEAMS, team_id).await
    }
}

impl<T: Transport> SparkClient<T> {
    /// Team operations.
    pub fn teams(&self) -> Teams<'_, T> {
        Teams::new(self)
    }
}
