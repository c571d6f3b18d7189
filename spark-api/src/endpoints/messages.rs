//! Message endpoints.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use spark_core::error::{SparkError, SparkResult};

use crate::client::{from_value, present, query_pairs, Resource, SparkClient};
use crate::models::Message;
use crate::response::ListResponse;
use crate::transport::{ReqwestTransport, Transport};

/// Filters for listing the messages of a room.
///
/// `room_id` is required; a bare string is taken as the room id. Messages
/// come back newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageListParams {
    pub room_id: String,
    /// Only messages mentioning this person id (or "me").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentioned_people: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl MessageListParams {
    pub fn validate(&self) -> SparkResult<()> {
        if self.room_id.trim().is_empty() {
            return Err(SparkError::InvalidParams("Invalid Params. Require roomId".into()));
        }
        Ok(())
    }
}

impl From<&str> for MessageListParams {
    fn from(room_id: &str) -> Self {
        Self {
            room_id: room_id.to_string(),
            ..Self::default()
        }
    }
}

impl From<String> for MessageListParams {
    fn from(room_id: String) -> Self {
        Self {
            room_id,
            ..Self::default()
        }
    }
}

/// Selects the 1:1 room for listing direct messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDirectParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
}

impl MessageDirectParams {
    pub fn by_person_id(person_id: impl Into<String>) -> Self {
        Self {
            person_id: Some(person_id.into()),
            person_email: None,
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            person_id: None,
            person_email: Some(email.into()),
        }
    }

    pub fn validate(&self) -> SparkResult<()> {
        if !present(&self.person_id) && !present(&self.person_email) {
            return Err(SparkError::InvalidParams(
                "Invalid params. Required personId or personEmail".into(),
            ));
        }
        Ok(())
    }
}

/// Body for posting a message.
///
/// One of `room_id`, `to_person_id` or `to_person_email` must be set. A bare
/// string is taken as markdown text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    /// Public URLs of files to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl MessageCreateParams {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn markdown(markdown: impl Into<String>) -> Self {
        Self {
            markdown: Some(markdown.into()),
            ..Self::default()
        }
    }

    /// Attach a file by public URL.
    pub fn with_file(mut self, url: impl Into<String>) -> Self {
        self.files.push(url.into());
        self
    }

    pub fn validate(&self) -> SparkResult<()> {
        if !present(&self.room_id) && !present(&self.to_person_id) && !present(&self.to_person_email)
        {
            return Err(SparkError::InvalidParams(
                "Invalid Params. Require roomId, toPersonId or toPersonEmail".into(),
            ));
        }
        Ok(())
    }
}

impl From<&str> for MessageCreateParams {
    fn from(markdown: &str) -> Self {
        Self::markdown(markdown)
    }
}

impl From<String> for MessageCreateParams {
    fn from(markdown: String) -> Self {
        Self::markdown(markdown)
    }
}

/// Handle for `/messages`.
pub struct Messages<'a, T = ReqwestTransport> {
    client: &'a SparkClient<T>,
}

impl<'a, T: Transport> Messages<'a, T> {
    pub fn new(client: &'a SparkClient<T>) -> Self {
        Self { client }
    }

    /// List messages in a room. Fails locally without a room id.
    pub async fn list(&self, params: impl Into<MessageListParams>) -> SparkResult<Vec<Message>> {
        let params = params.into();
        params.validate()?;
        self.client.list(&Resource::MESSAGES, &params).await
    }

    /// List messages in the 1:1 room with a person.
    pub async fn direct(&self, params: &MessageDirectParams) -> SparkResult<Vec<Message>> {
        params.validate()?;
        let url = self.client.url(&Resource::MESSAGES, None, Some("direct"))?;
        let value = self
            .client
            .request(Method::GET, url, query_pairs(params)?, None)
            .await?;
        let list: ListResponse<Message> = from_value(value)?;
        Ok(list.items)
    }

    /// Post a message. Fails locally when no destination is set.
    pub async fn create(&self, params: &MessageCreateParams) -> SparkResult<Message> {
        params.validate()?;
        self.client.create(&Resource::MESSAGES, params).await
    }

    /// Post to a room; a bare string is sent as markdown.
    pub async fn create_to_room(
        &self,
        room_id: &str,
        params: impl Into<MessageCreateParams>,
    ) -> SparkResult<Message> {
        let mut params = params.into();
        params.room_id = Some(room_id.to_string());
        self.create(&params).await
    }

    /// Post directly to a person id; a bare string is sent as markdown.
    pub async fn create_to_person_id(
        &self,
        person_id: &str,
        params: impl Into<MessageCreateParams>,
    ) -> SparkResult<Message> {
        let mut params = params.into();
        params.to_person_id = Some(person_id.to_string());
        self.create(&params).await
    }

    /// Post directly to an email address; a bare string is sent as markdown.
    pub async fn create_to_person_email(
        &self,
        email: &str,
        params: impl Into<MessageCreateParams>,
    ) -> SparkResult<Message> {
        let mut params = params.into();
        params.to_person_email = Some(email.to_string());
        self.create(&params).await
    }

    pub async fn get(&self, message_id: &str) -> SparkResult<Message> {
        self.client.get(&Resource::MESSAGES, message_id).await
    }

    pub async fn delete(&self, message_id: &str) -> SparkResult<()> {
        self.client.delete(&Resource::MESSAGES, message_id).await
    }
}

impl<T: Transport> SparkClient<T> {
    /// Message operations.
    pub fn messages(&self) -> Messages<'_, T> {
        Messages::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_list_requires_room() {
        let err = MessageListParams::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid Params. Require roomId");
        assert!(MessageListParams::from("room-1").validate().is_ok());
    }

    #[test]
    fn test_list_params_serialize_before() {
        let params = MessageListParams {
            room_id: "r".into(),
            before: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            max: Some(10),
            ..Default::default()
        };
        let pairs = query_pairs(&params).unwrap();
        assert!(pairs.contains(&("before".to_string(), "2024-01-02T03:04:05Z".to_string())));
        assert!(pairs.contains(&("roomId".to_string(), "r".to_string())));
        assert!(pairs.contains(&("max".to_string(), "10".to_string())));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_direct_requires_person() {
        let err = MessageDirectParams::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid params. Required personId or personEmail");
        assert!(MessageDirectParams::by_email("a@example.com").validate().is_ok());
        assert!(MessageDirectParams::by_person_id("p1").validate().is_ok());
    }

    #[test]
    fn test_create_requires_destination() {
        let err = MessageCreateParams::text("hi").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Params. Require roomId, toPersonId or toPersonEmail"
        );

        let mut params = MessageCreateParams::text("hi");
        params.to_person_email = Some("a@example.com".into());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_bare_string_is_markdown() {
        let params: MessageCreateParams = "**bold**".into();
        assert_eq!(params.markdown.as_deref(), Some("**bold**"));
        assert!(params.text.is_none());
    }

    #[test]
    fn test_create_body_shape() {
        let mut params = MessageCreateParams::text("report").with_file("https://example.com/a.pdf");
        params.room_id = Some("r1".into());
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "roomId": "r1",
                "text": "report",
                "files": ["https://example.com/a.pdf"]
            })
        );
    }
}
