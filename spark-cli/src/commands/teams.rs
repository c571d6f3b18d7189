//! Team commands.

use clap::Subcommand;

use spark_api::{Team, TeamListParams, TeamUpdateParams};
use spark_core::config::AppConfig;
use spark_core::error::SparkResult;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum TeamsAction {
    /// List teams.
    List {
        #[arg(short = 'n', long)]
        max: Option<u32>,
    },
    /// Show a team.
    Get {
        team_id: String,
    },
    /// Create a team.
    Create {
        name: String,
    },
    /// Rename a team.
    Rename {
        team_id: String,
        name: String,
    },
    /// Delete a team.
    Delete {
        team_id: String,
    },
}

pub async fn run(config: &AppConfig, action: TeamsAction, format: OutputFormat) -> SparkResult<()> {
    let api = super::create_api_client(config)?;
    let teams = api.teams();

    match action {
        TeamsAction::List { max } => {
            let list = teams.list(&TeamListParams { max }).await?;
            match format {
                OutputFormat::Json => super::print_json(&list),
                OutputFormat::Text => print_teams(&list),
            }
        }
        TeamsAction::Get { team_id } => {
            let team = teams.get(&team_id).await?;
            match format {
                OutputFormat::Json => super::print_json(&team),
                OutputFormat::Text => print_teams(std::slice::from_ref(&team)),
            }
        }
        TeamsAction::Create { name } => {
            let team = teams.create(name.as_str()).await?;
            match format {
                OutputFormat::Json => super::print_json(&team),
                OutputFormat::Text => super::print_done(&format!("created team {}", team.id)),
            }
        }
        TeamsAction::Rename { team_id, name } => {
            let team = teams.update(&team_id, &TeamUpdateParams { name }).await?;
            match format {
                OutputFormat::Json => super::print_json(&team),
                OutputFormat::Text => super::print_done(&format!("renamed team {}", team.id)),
            }
        }
        TeamsAction::Delete { team_id } => {
            teams.delete(&team_id).await?;
            match format {
                OutputFormat::Json => super::print_json(&serde_json::json!({ "deleted": team_id })),
                OutputFormat::Text => super::print_done(&format!("deleted team {team_id}")),
            }
        }
    }

    Ok(())
}

fn print_teams(teams: &[Team]) {
    if teams.is_empty() {
        super::print_empty("teams");
        return;
    }
    let mut table = super::new_table(vec!["ID", "Name", "Created"]);
    for team in teams {
        table.add_row(vec![
            team.id.clone(),
            super::or_dash(team.name.as_deref()),
            super::format_date(team.created),
        ]);
    }
    println!("{table}");
}
