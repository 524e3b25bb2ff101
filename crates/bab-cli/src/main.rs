mod client;
mod commands;

use std::path::PathBuf;

use bab_core::config::ClientConfig;
use bab_core::types::PartType;
use clap::{Parser, Subcommand};

use crate::client::HttpApi;

const DEFAULT_API_URL: &str = "http://localhost:8081";

/// build-a-bot CLI -- browse robot parts, build robots and fill a cart.
#[derive(Parser)]
#[command(name = "bab", version, about)]
struct Cli {
    /// Config file (defaults to ~/.build-a-bot/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the parts service; overrides the config file.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the parts catalog.
    Parts {
        /// Only show one list (heads, arms, torsos, bases).
        #[arg(long = "type")]
        part_type: Option<PartType>,
    },

    /// Show a single part, as the /parts/<type>/<id> page would.
    Part {
        /// Part list (heads, arms, torsos, bases).
        part_type: String,
        /// Part id; must be an integer.
        id: String,
    },

    /// Assemble robots from catalog indices and add them to the cart.
    Build {
        /// `head,left-arm,torso,right-arm,base` indices; repeat for more robots.
        #[arg(long = "robot", required = true)]
        robots: Vec<String>,
    },

    /// Sign in to the parts service.
    SignIn,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config.validate()?;
    }
    if config.api.base_url.trim().is_empty() {
        config.api.base_url = DEFAULT_API_URL.to_string();
    }

    if cli.json_logs || config.logging.json {
        bab_telemetry::init_logging_json("bab", &config.logging.level);
    } else {
        bab_telemetry::init_logging("bab", &config.logging.level);
    }
    tracing::debug!(api = %config.api.base_url, "configuration loaded");

    let api = HttpApi::new(config.api);

    match cli.command {
        Commands::Parts { part_type } => commands::parts::run(&api, part_type).await?,
        Commands::Part { part_type, id } => commands::part::run(&api, &part_type, &id).await?,
        Commands::Build { robots } => commands::build::run(&api, &robots).await?,
        Commands::SignIn => commands::sign_in::run(&api).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_robots() {
        let cli = Cli::parse_from([
            "bab",
            "--api-url",
            "http://localhost:9000",
            "build",
            "--robot",
            "0,0,0,0,0",
            "--robot",
            "1,1,1,1,1",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000"));
        match cli.command {
            Commands::Build { robots } => assert_eq!(robots.len(), 2),
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn parts_type_uses_part_type_parser() {
        let cli = Cli::parse_from(["bab", "parts", "--type", "arms"]);
        match cli.command {
            Commands::Parts { part_type } => assert_eq!(part_type, Some(PartType::Arms)),
            _ => panic!("expected parts"),
        }
        assert!(Cli::try_parse_from(["bab", "parts", "--type", "legs"]).is_err());
    }
}
