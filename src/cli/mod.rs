//! Command-line interface with clap
//!
//! Defines the CLI structure and dispatches commands to the server and
//! migration runner.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigLoader;
use crate::db::run_pending_migrations;
use crate::logger::init_logger;
use crate::server::Server;

/// A product catalog REST API server
#[derive(Parser, Debug)]
#[command(name = "products-api")]
#[command(about = "A product catalog REST API with token-gated endpoints")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered config directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve,
    /// Apply pending database migrations
    Migrate,
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Loads configuration, initializes logging, and dispatches to the
    /// selected subcommand. Running without a subcommand starts the server.
    pub async fn run(self) -> anyhow::Result<()> {
        let loader = match self.config {
            Some(path) => ConfigLoader::with_config_file(path),
            None => ConfigLoader::new()?,
        };
        let mut settings = loader.load()?;

        if self.verbose {
            settings.logger.level = "debug".to_string();
        } else if self.quiet {
            settings.logger.level = "error".to_string();
        }

        init_logger(&settings.logger)?;

        match self.command {
            Some(Commands::Migrate) => {
                let applied = run_pending_migrations(settings.database.url.clone()).await?;
                println!("Applied {} migration(s)", applied);
                Ok(())
            }
            Some(Commands::Serve) | None => Server::new(settings).run().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["products-api"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_serve_command() {
        let cli = Cli::try_parse_from(["products-api", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn test_migrate_command() {
        let cli = Cli::try_parse_from(["products-api", "migrate"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Migrate)));
    }

    #[test]
    fn test_config_flag() {
        let cli =
            Cli::try_parse_from(["products-api", "--config", "/etc/products/api.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/products/api.toml")));
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let result = Cli::try_parse_from(["products-api", "--verbose", "--quiet"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
