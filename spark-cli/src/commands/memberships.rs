//! Room membership commands.

use clap::Subcommand;

use spark_api::{Membership, MembershipCreateParams, MembershipListParams, MembershipUpdateParams};
use spark_core::config::AppConfig;
use spark_core::error::SparkResult;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum MembershipsAction {
    /// List memberships of a room, or of a person across rooms.
    List {
        room_id: Option<String>,
        #[arg(long)]
        person_id: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(short = 'n', long)]
        max: Option<u32>,
    },
    /// Show a membership.
    Get {
        membership_id: String,
    },
    /// Add a person to a room.
    Add {
        room_id: String,
        #[arg(long, required_unless_present = "email")]
        person_id: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Make the person a moderator.
        #[arg(long)]
        moderator: bool,
    },
    /// Grant or revoke moderator rights.
    SetModerator {
        membership_id: String,
        #[arg(action = clap::ArgAction::Set)]
        moderator: bool,
    },
    /// Remove a membership.
    Remove {
        membership_id: String,
    },
}

pub async fn run(
    config: &AppConfig,
    action: MembershipsAction,
    format: OutputFormat,
) -> SparkResult<()> {
    let api = super::create_api_client(config)?;
    let memberships = api.memberships();

    match action {
        MembershipsAction::List { room_id, person_id, email, max } => {
            let params = MembershipListParams {
                room_id,
                person_id,
                person_email: email,
                max,
            };
            let list = memberships.list(params).await?;
            match format {
                OutputFormat::Json => super::print_json(&list),
                OutputFormat::Text => print_memberships(&list),
            }
        }
        MembershipsAction::Get { membership_id } => {
            let membership = memberships.get(&membership_id).await?;
            match format {
                OutputFormat::Json => super::print_json(&membership),
                OutputFormat::Text => print_memberships(std::slice::from_ref(&membership)),
            }
        }
        MembershipsAction::Add { room_id, person_id, email, moderator } => {
            let params = MembershipCreateParams {
                room_id,
                person_id,
                person_email: email,
                is_moderator: moderator.then_some(true),
            };
            let membership = memberships.create(&params).await?;
            match format {
                OutputFormat::Json => super::print_json(&membership),
                OutputFormat::Text => {
                    super::print_done(&format!("created membership {}", membership.id))
                }
            }
        }
        MembershipsAction::SetModerator { membership_id, moderator } => {
            let membership = memberships
                .update(&membership_id, &MembershipUpdateParams { is_moderator: moderator })
                .await?;
            match format {
                OutputFormat::Json => super::print_json(&membership),
                OutputFormat::Text => {
                    super::print_done(&format!("updated membership {}", membership.id))
                }
            }
        }
        MembershipsAction::Remove { membership_id } => {
            memberships.delete(&membership_id).await?;
            match format {
                OutputFormat::Json => {
                    super::print_json(&serde_json::json!({ "deleted": membership_id }))
                }
                OutputFormat::Text => {
                    super::print_done(&format!("removed membership {membership_id}"))
                }
            }
        }
    }

    Ok(())
}

fn print_memberships(memberships: &[Membership]) {
    if memberships.is_empty() {
        super::print_empty("memberships");
        return;
    }
    let mut table = super::new_table(vec!["ID", "Person", "Room", "Moderator"]);
    for m in memberships {
        let person = m
            .person_display_name
            .as_deref()
            .or(m.person_email.as_deref());
        table.add_row(vec![
            m.id.clone(),
            super::or_dash(person),
            super::or_dash(m.room_id.as_deref()),
            if m.is_moderator { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
}
