//! Webhook commands.

use clap::Subcommand;

use spark_api::{Webhook, WebhookCreateParams, WebhookListParams, WebhookUpdateParams};
use spark_core::config::AppConfig;
use spark_core::error::SparkResult;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum WebhooksAction {
    /// List webhooks.
    List {
        #[arg(short = 'n', long)]
        max: Option<u32>,
    },
    /// Show a webhook.
    Get {
        webhook_id: String,
    },
    /// Register a webhook.
    Create {
        name: String,
        target_url: String,
        /// Watched resource: messages, memberships, rooms or all.
        #[arg(long, default_value = "messages")]
        resource: String,
        /// Watched event: created, updated, deleted or all.
        #[arg(long, default_value = "created")]
        event: String,
        /// Event filter, e.g. "roomId=<id>".
        #[arg(long)]
        filter: Option<String>,
        /// Secret used to sign payloads.
        #[arg(long)]
        secret: Option<String>,
    },
    /// Change a webhook's name, target or status.
    Update {
        webhook_id: String,
        name: String,
        target_url: String,
        #[arg(long)]
        secret: Option<String>,
        /// active or inactive.
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a webhook.
    Delete {
        webhook_id: String,
    },
}

pub async fn run(config: &AppConfig, action: WebhooksAction, format: OutputFormat) -> SparkResult<()> {
    let api = super::create_api_client(config)?;
    let webhooks = api.webhooks();

    match action {
        WebhooksAction::List { max } => {
            let list = webhooks.list(&WebhookListParams { max }).await?;
            match format {
                OutputFormat::Json => super::print_json(&list),
                OutputFormat::Text => print_webhooks(&list),
            }
        }
        WebhooksAction::Get { webhook_id } => {
            let hook = webhooks.get(&webhook_id).await?;
            match format {
                OutputFormat::Json => super::print_json(&hook),
                OutputFormat::Text => print_webhooks(std::slice::from_ref(&hook)),
            }
        }
        WebhooksAction::Create { name, target_url, resource, event, filter, secret } => {
            let params = WebhookCreateParams {
                name,
                target_url,
                resource,
                event,
                filter,
                secret,
            };
            let hook = webhooks.create(&params).await?;
            match format {
                OutputFormat::Json => super::print_json(&hook),
                OutputFormat::Text => super::print_done(&format!("created webhook {}", hook.id)),
            }
        }
        WebhooksAction::Update { webhook_id, name, target_url, secret, status } => {
            let params = WebhookUpdateParams {
                name,
                target_url,
                secret,
                status,
            };
            let hook = webhooks.update(&webhook_id, &params).await?;
            match format {
                OutputFormat::Json => super::print_json(&hook),
                OutputFormat::Text => super::print_done(&format!("updated webhook {}", hook.id)),
            }
        }
        WebhooksAction::Delete { webhook_id } => {
            webhooks.delete(&webhook_id).await?;
            match format {
                OutputFormat::Json => {
                    super::print_json(&serde_json::json!({ "deleted": webhook_id }))
                }
                OutputFormat::Text => super::print_done(&format!("deleted webhook {webhook_id}")),
            }
        }
    }

    Ok(())
}

fn print_webhooks(hooks: &[Webhook]) {
    if hooks.is_empty() {
        super::print_empty("webhooks");
        return;
    }
    let mut table = super::new_table(vec!["ID", "Name", "Target", "Resource/Event", "Status"]);
    for hook in hooks {
        table.add_row(vec![
            hook.id.clone(),
            super::or_dash(hook.name.as_deref()),
            super::truncate(hook.target_url.as_deref().unwrap_or("-"), 40),
            format!(
                "{}/{}",
                hook.resource.as_deref().unwrap_or("?"),
                hook.event.as_deref().unwrap_or("?")
            ),
            super::or_dash(hook.status.as_deref()),
        ]);
    }
    println!("{table}");
}
