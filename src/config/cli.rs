use crate::config::toml_config::{AppConfig, OutputFormat, SourceKind};
use crate::core::matcher::FallbackMode;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "place-finder")]
#[command(about = "Find sustainable places by category and browse the leaderboard")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search the catalog and print the map markers
    Search {
        /// Category or free text, e.g. "food" or "eco"
        query: String,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Match tags word by word instead of by raw substring
        #[arg(long)]
        strict: bool,

        /// JSON catalog to search instead of the built-in one
        #[arg(long)]
        catalog: Option<String>,
    },
    /// List the category keys
    Categories {
        #[arg(long)]
        catalog: Option<String>,
    },
    /// Show the leaderboard and the products worth replacing
    Leaderboard {
        /// Read from a local JSON file
        #[arg(long, conflicts_with = "endpoint")]
        file: Option<String>,

        /// Fetch from a REST endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// How many products to list
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

impl Cli {
    /// Folds command-line overrides into a loaded configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        match &self.command {
            Command::Search {
                format,
                strict,
                catalog,
                ..
            } => {
                if let Some(format) = format {
                    config.output.format = *format;
                }
                if *strict {
                    config.search.fallback = FallbackMode::WordPrefix;
                }
                if catalog.is_some() {
                    config.catalog.path = catalog.clone();
                }
            }
            Command::Categories { catalog } => {
                if catalog.is_some() {
                    config.catalog.path = catalog.clone();
                }
            }
            Command::Leaderboard {
                file,
                endpoint,
                limit,
                format,
            } => {
                if let Some(file) = file {
                    config.leaderboard.source = SourceKind::File;
                    config.leaderboard.path = Some(file.clone());
                }
                if let Some(endpoint) = endpoint {
                    config.leaderboard.source = SourceKind::Http;
                    config.leaderboard.endpoint = Some(endpoint.clone());
                }
                if let Some(limit) = limit {
                    config.leaderboard.harmful_limit = *limit;
                }
                if let Some(format) = format {
                    config.output.format = *format;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::parse_from(["place-finder", "search", "food", "--format", "json", "--strict"]);
        match &cli.command {
            Command::Search { query, format, strict, .. } => {
                assert_eq!(query, "food");
                assert_eq!(*format, Some(OutputFormat::Json));
                assert!(*strict);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_search_overrides() {
        let cli = Cli::parse_from(["place-finder", "-v", "search", "eco", "--strict"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert!(cli.verbose);
        assert_eq!(config.search.fallback, FallbackMode::WordPrefix);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_leaderboard_endpoint_override() {
        let cli = Cli::parse_from([
            "place-finder",
            "leaderboard",
            "--endpoint",
            "http://localhost:3000/leaderboard",
            "--limit",
            "3",
        ]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.leaderboard.source, SourceKind::Http);
        assert_eq!(
            config.leaderboard.endpoint.as_deref(),
            Some("http://localhost:3000/leaderboard")
        );
        assert_eq!(config.leaderboard.harmful_limit, 3);
    }

    #[test]
    fn test_file_and_endpoint_conflict() {
        let result = Cli::try_parse_from([
            "place-finder",
            "leaderboard",
            "--file",
            "a.json",
            "--endpoint",
            "http://localhost/x",
        ]);
        assert!(result.is_err());
    }
}
