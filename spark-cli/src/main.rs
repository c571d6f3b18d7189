//! Spark CLI - command-line access to the Spark messaging REST API.
//!
//! Every resource operation of the `spark-api` crate is reachable from a
//! subcommand, which makes the binary handy for scripting and for checking
//! an access token against a live account.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use spark_core::config::AppConfig;
use spark_core::error::SparkResult;
use spark_core::logging;

/// Spark - rooms, messages, memberships, teams and webhooks from the terminal.
#[derive(Parser)]
#[command(
    name = "spark",
    version,
    about = "Spark messaging REST API client",
    long_about = "A command-line client for the Spark messaging REST API.\n\
                  The access token is read from the config file, --token, or CISCOSPARK_ACCESS_TOKEN."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Access token (overrides config and environment).
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List and manage rooms.
    Rooms {
        #[command(subcommand)]
        action: commands::rooms::RoomsAction,
    },
    /// List, send and delete messages.
    Messages {
        #[command(subcommand)]
        action: commands::messages::MessagesAction,
    },
    /// Manage room memberships.
    Memberships {
        #[command(subcommand)]
        action: commands::memberships::MembershipsAction,
    },
    /// Manage team memberships.
    TeamMemberships {
        #[command(subcommand)]
        action: commands::team_memberships::TeamMembershipsAction,
    },
    /// List and manage teams.
    Teams {
        #[command(subcommand)]
        action: commands::teams::TeamsAction,
    },
    /// List and manage webhooks.
    Webhooks {
        #[command(subcommand)]
        action: commands::webhooks::WebhooksAction,
    },
    /// Show or write the configuration file.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Apply `--token`, then `CISCOSPARK_ACCESS_TOKEN` if the token is still empty.
///
/// `config save` skips the environment so it never persists an env-only token.
fn effective_config(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(token) = cli.token.clone() {
        config.api.access_token = token;
    }
    let saving = matches!(
        cli.command,
        Commands::Config {
            action: commands::config::ConfigAction::Save { .. }
        }
    );
    if !saving {
        config.api.apply_env_overrides();
    }
    config
}

#[tokio::main]
async fn main() -> SparkResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => AppConfig::default_config_path()?,
    };
    let loaded = if config_path.exists() {
        AppConfig::load_from_file(&config_path)?
    } else {
        AppConfig::default()
    };
    let config = effective_config(loaded, &cli);

    let log_level = if cli.verbose { "debug".to_string() } else { config.logging.level.clone() };
    let log_dir = config
        .effective_log_dir()
        .unwrap_or_else(|_| PathBuf::from("logs"));
    let _guard = logging::init_logging(&log_level, &log_dir, config.logging.json_output)?;

    debug!("spark CLI v{}", spark_core::constants::APP_VERSION);

    match cli.command {
        Commands::Rooms { action } => commands::rooms::run(&config, action, cli.format).await,
        Commands::Messages { action } => {
            commands::messages::run(&config, action, cli.format).await
        }
        Commands::Memberships { action } => {
            commands::memberships::run(&config, action, cli.format).await
        }
        Commands::TeamMemberships { action } => {
            commands::team_memberships::run(&config, action, cli.format).await
        }
        Commands::Teams { action } => commands::teams::run(&config, action, cli.format).await,
        Commands::Webhooks { action } => {
            commands::webhooks::run(&config, action, cli.format).await
        }
        Commands::Config { action } => commands::config::run(config, &config_path, action, cli.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_messages_send() {
        let cli = Cli::try_parse_from([
            "spark", "messages", "send", "--room", "r1", "hello", "-f", "json",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Messages { .. }));
    }

    #[test]
    fn test_config_save_ignores_env_token() {
        std::env::set_var(spark_core::constants::ACCESS_TOKEN_ENV, "env-token");

        let cli = Cli::try_parse_from(["spark", "config", "save"]).unwrap();
        let saved = effective_config(AppConfig::default(), &cli);
        assert!(!saved.api.has_access_token());

        let cli = Cli::try_parse_from(["spark", "config", "save", "-t", "cli-token"]).unwrap();
        let saved = effective_config(AppConfig::default(), &cli);
        assert_eq!(saved.api.access_token, "cli-token");

        let cli = Cli::try_parse_from(["spark", "rooms", "list"]).unwrap();
        let used = effective_config(AppConfig::default(), &cli);
        assert_eq!(used.api.access_token, "env-token");

        std::env::remove_var(spark_core::constants::ACCESS_TOKEN_ENV);
    }

    #[test]
    fn test_parse_team_memberships_list() {
        let cli = Cli::try_parse_from(["spark", "team-memberships", "list", "t1"]).unwrap();
        assert!(matches!(cli.command, Commands::TeamMemberships { .. }));
    }
}
