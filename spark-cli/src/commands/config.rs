//! Configuration commands.

use std::path::Path;

use clap::Subcommand;
use console::style;

use spark_core::config::AppConfig;
use spark_core::error::SparkResult;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration (token masked).
    Show,
    /// Write the configuration, including --token, to the config file.
    ///
    /// A token taken only from CISCOSPARK_ACCESS_TOKEN is not saved.
    Save {
        /// Override the API base URL before saving.
        #[arg(long)]
        base_url: Option<String>,
    },
}

pub fn run(
    mut config: AppConfig,
    path: &Path,
    action: ConfigAction,
    format: OutputFormat,
) -> SparkResult<()> {
    match action {
        ConfigAction::Show => {
            config.api.access_token = mask_token(&config.api.access_token);
            match format {
                OutputFormat::Json => super::print_json(&config),
                OutputFormat::Text => {
                    println!("{}", style("Configuration").bold().underlined());
                    println!("  File:         {}", path.display());
                    println!("  Base URL:     {}", config.api.base_url);
                    println!("  Access token: {}", config.api.access_token);
                    println!("  User agent:   {}", config.api.user_agent);
                    println!("  Timeout:      {} ms", config.api.timeout_ms);
                    println!("  Log level:    {}", config.logging.level);
                }
            }
        }
        ConfigAction::Save { base_url } => {
            if let Some(url) = base_url {
                config.api.base_url = AppConfig::sanitize_base_url(&url);
            }
            config.save_to_file(path)?;
            match format {
                OutputFormat::Json => {
                    super::print_json(&serde_json::json!({ "saved": path.display().to_string() }))
                }
                OutputFormat::Text => {
                    super::print_done(&format!("saved configuration to {}", path.display()))
                }
            }
        }
    }

    Ok(())
}

/// Keep the last four characters of a token visible.
fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return "(not set)".to_string();
    }
    let count = token.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = token.chars().skip(count - 4).collect();
    format!("{}{tail}", "*".repeat(count - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token(""), "(not set)");
        assert_eq!(mask_token("abc"), "***");
        assert_eq!(mask_token("abcdefgh"), "****efgh");
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = AppConfig::default();
        config.api.access_token = "tok".into();

        run(
            config,
            &path,
            ConfigAction::Save { base_url: Some("localhost:8080/v1/".into()) },
            OutputFormat::Json,
        )
        .unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.access_token, "tok");
        assert_eq!(loaded.api.base_url, "https://localhost:8080/v1");
    }
}
