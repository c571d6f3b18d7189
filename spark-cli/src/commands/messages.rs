//! Message commands.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use spark_api::{Message, MessageCreateParams, MessageDirectParams, MessageListParams};
use spark_core::config::AppConfig;
use spark_core::error::{SparkError, SparkResult};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum MessagesAction {
    /// List messages in a room, newest first.
    List {
        room_id: String,
        /// Only messages mentioning this person id ("me" for yourself).
        #[arg(long)]
        mentioned: Option<String>,
        /// Only messages sent before this RFC 3339 timestamp.
        #[arg(long)]
        before: Option<String>,
        /// Only messages sent before this message id.
        #[arg(long)]
        before_message: Option<String>,
        /// Maximum number of messages.
        #[arg(short = 'n', long)]
        max: Option<u32>,
    },
    /// List messages in the 1:1 room with a person.
    Direct {
        #[command(flatten)]
        person: PersonArgs,
    },
    /// Send a message to a room or a person.
    Send {
        #[command(flatten)]
        target: TargetArgs,
        /// Message text (markdown unless --plain).
        text: String,
        /// Send as plain text instead of markdown.
        #[arg(long)]
        plain: bool,
        /// Public URL of a file to attach.
        #[arg(long = "file")]
        files: Vec<String>,
    },
    /// Show a message.
    Get {
        message_id: String,
    },
    /// Delete a message.
    Delete {
        message_id: String,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct PersonArgs {
    /// Person id.
    #[arg(long)]
    person_id: Option<String>,
    /// Person email address.
    #[arg(long)]
    email: Option<String>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Room id.
    #[arg(long)]
    room: Option<String>,
    /// Recipient person id.
    #[arg(long)]
    to_person: Option<String>,
    /// Recipient email address.
    #[arg(long)]
    to_email: Option<String>,
}

pub async fn run(config: &AppConfig, action: MessagesAction, format: OutputFormat) -> SparkResult<()> {
    let api = super::create_api_client(config)?;
    let messages = api.messages();

    match action {
        MessagesAction::List { room_id, mentioned, before, before_message, max } => {
            let params = MessageListParams {
                room_id,
                mentioned_people: mentioned,
                before: before.as_deref().map(parse_timestamp).transpose()?,
                before_message,
                max,
            };
            let list = messages.list(params).await?;
            match format {
                OutputFormat::Json => super::print_json(&list),
                OutputFormat::Text => print_messages(&list),
            }
        }
        MessagesAction::Direct { person } => {
            let params = MessageDirectParams {
                person_id: person.person_id,
                person_email: person.email,
            };
            let list = messages.direct(&params).await?;
            match format {
                OutputFormat::Json => super::print_json(&list),
                OutputFormat::Text => print_messages(&list),
            }
        }
        MessagesAction::Send { target, text, plain, files } => {
            let mut params = if plain {
                MessageCreateParams::text(text)
            } else {
                MessageCreateParams::markdown(text)
            };
            params.files = files;
            params.room_id = target.room;
            params.to_person_id = target.to_person;
            params.to_person_email = target.to_email;

            let message = messages.create(&params).await?;
            match format {
                OutputFormat::Json => super::print_json(&message),
                OutputFormat::Text => super::print_done(&format!("sent message {}", message.id)),
            }
        }
        MessagesAction::Get { message_id } => {
            let message = messages.get(&message_id).await?;
            match format {
                OutputFormat::Json => super::print_json(&message),
                OutputFormat::Text => print_messages(std::slice::from_ref(&message)),
            }
        }
        MessagesAction::Delete { message_id } => {
            messages.delete(&message_id).await?;
            match format {
                OutputFormat::Json => {
                    super::print_json(&serde_json::json!({ "deleted": message_id }))
                }
                OutputFormat::Text => super::print_done(&format!("deleted message {message_id}")),
            }
        }
    }

    Ok(())
}

fn parse_timestamp(value: &str) -> SparkResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| SparkError::InvalidParams(format!("invalid --before timestamp {value}: {e}")))
}

fn print_messages(messages: &[Message]) {
    if messages.is_empty() {
        super::print_empty("messages");
        return;
    }
    let mut table = super::new_table(vec!["Date", "From", "Text", "Files"]);
    for message in messages {
        let body = message
            .text
            .as_deref()
            .or(message.markdown.as_deref())
            .unwrap_or("");
        table.add_row(vec![
            super::format_date(message.created),
            super::or_dash(message.person_email.as_deref()),
            super::truncate(body, 60),
            message.files.len().to_string(),
        ]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        let d = parse_timestamp("2024-02-03T04:05:06+02:00").unwrap();
        assert_eq!(d.to_rfc3339(), "2024-02-03T02:05:06+00:00");
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(SparkError::InvalidParams(_))
        ));
    }
}
