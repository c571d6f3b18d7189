//! Team membership commands.

use clap::Subcommand;

use spark_api::{TeamMembership, TeamMembershipCreateParams, TeamMembershipUpdateParams};
use spark_core::config::AppConfig;
use spark_core::error::SparkResult;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum TeamMembershipsAction {
    /// List the members of a team.
    List {
        team_id: String,
    },
    /// Show a team membership.
    Get {
        membership_id: String,
    },
    /// Add a person to a team.
    Add {
        team_id: String,
        #[arg(long, required_unless_present = "email")]
        person_id: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        moderator: bool,
    },
    /// Grant or revoke moderator rights.
    SetModerator {
        membership_id: String,
        #[arg(action = clap::ArgAction::Set)]
        moderator: bool,
    },
    /// Remove a team membership.
    Remove {
        membership_id: String,
    },
}

pub async fn run(
    config: &AppConfig,
    action: TeamMembershipsAction,
    format: OutputFormat,
) -> SparkResult<()> {
    let api = super::create_api_client(config)?;
    let memberships = api.team_memberships();

    match action {
        TeamMembershipsAction::List { team_id } => {
            let list = memberships.list(team_id).await?;
            match format {
                OutputFormat::Json => super::print_json(&list),
                OutputFormat::Text => print_team_memberships(&list),
            }
        }
        TeamMembershipsAction::Get { membership_id } => {
            let membership = memberships.get(&membership_id).await?;
            match format {
                OutputFormat::Json => super::print_json(&membership),
                OutputFormat::Text => print_team_memberships(std::slice::from_ref(&membership)),
            }
        }
        TeamMembershipsAction::Add { team_id, person_id, email, moderator } => {
            let params = TeamMembershipCreateParams {
                team_id,
                person_id,
                person_email: email,
                is_moderator: moderator.then_some(true),
            };
            let membership = memberships.create(&params).await?;
            match format {
                OutputFormat::Json => super::print_json(&membership),
                OutputFormat::Text => {
                    super::print_done(&format!("created team membership {}", membership.id))
                }
            }
        }
        TeamMembershipsAction::SetModerator { membership_id, moderator } => {
            let membership = memberships
                .update(&membership_id, &TeamMembershipUpdateParams { is_moderator: moderator })
                .await?;
            match format {
                OutputFormat::Json => super::print_json(&membership),
                OutputFormat::Text => {
                    super::print_done(&format!("updated team membership {}", membership.id))
                }
            }
        }
        TeamMembershipsAction::Remove { membership_id } => {
            memberships.delete(&membership_id).await?;
            match format {
                OutputFormat::Json => {
                    super::print_json(&serde_json::json!({ "deleted": membership_id }))
                }
                OutputFormat::Text => {
                    super::print_done(&format!("removed team membership {membership_id}"))
                }
            }
        }
    }

    Ok(())
}

fn print_team_memberships(memberships: &[TeamMembership]) {
    if memberships.is_empty() {
        super::print_empty("team memberships");
        return;
    }
    let mut table = super::new_table(vec!["ID", "Person", "Team", "Moderator"]);
    for m in memberships {
        let person = m
            .person_display_name
            .as_deref()
            .or(m.person_email.as_deref());
        table.add_row(vec![
            m.id.clone(),
            super::or_dash(person),
            super::or_dash(m.team_id.as_deref()),
            if m.is_moderator { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
}
