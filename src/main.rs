use anyhow::Context;
use clap::Parser;
use place_finder::config::cli::Command;
use place_finder::config::OutputFormat;
use place_finder::utils::error::ErrorSeverity;
use place_finder::utils::logger;
use place_finder::{
    AppConfig, Cli, FinderError, JsonRenderer, Leaderboard, PlaceFinder, SearchMatcher,
    TextRenderer,
};
use std::io::Write;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = run(cli).await {
        let exit_code = match e.downcast_ref::<FinderError>() {
            Some(err) => {
                tracing::error!(
                    "❌ {:#} (Category: {:?}, Severity: {:?})",
                    e,
                    err.category(),
                    err.severity()
                );
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());

                match err.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                }
            }
            None => {
                eprintln!("❌ {:#}", e);
                1
            }
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            AppConfig::from_file(path).with_context(|| format!("failed to load config '{}'", path))?
        }
        None => AppConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate_catalog()?;
    if matches!(cli.command, Command::Leaderboard { .. }) {
        config.validate_leaderboard()?;
    }

    match &cli.command {
        Command::Search { query, .. } => search(&config, query),
        Command::Categories { .. } => categories(&config),
        Command::Leaderboard { .. } => leaderboard(&config).await,
    }
}

fn search(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let catalog = Arc::new(config.load_catalog().context("failed to load the place catalog")?);
    let matcher = SearchMatcher::with_mode(catalog, config.search.fallback);
    let stdout = std::io::stdout().lock();

    let report = match config.output.format {
        OutputFormat::Json => PlaceFinder::new(matcher, JsonRenderer::new(stdout)).submit(query)?,
        OutputFormat::Text => PlaceFinder::new(matcher, TextRenderer::new(stdout)).submit(query)?,
    };
    tracing::debug!("Search for '{}' was a {:?} match", query, report.kind);
    Ok(())
}

fn categories(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = config.load_catalog().context("failed to load the place catalog")?;
    let mut out = std::io::stdout().lock();
    for key in catalog.categories() {
        let count = catalog.get(key).map_or(0, |places| places.len());
        writeln!(out, "{:<16} {}", key, count)?;
    }
    Ok(())
}

async fn leaderboard(config: &AppConfig) -> anyhow::Result<()> {
    let source = config.leaderboard_source()?;
    let board = Leaderboard::load(source.as_ref(), config.leaderboard.harmful_limit).await?;
    let mut out = std::io::stdout().lock();

    match config.output.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&board)?)?,
        OutputFormat::Text => {
            writeln!(out, "🏆 Global Rankings")?;
            for standing in &board.standings {
                writeln!(
                    out,
                    "{:>3} {:<20} {}",
                    standing.rank_label(),
                    standing.user_id,
                    standing.score_label()
                )?;
            }
            if !board.harmful_products.is_empty() {
                writeln!(out)?;
                writeln!(out, "How can I climb up the leaderboard? Replace these products!")?;
                for product in &board.harmful_products {
                    writeln!(
                        out,
                        "  {} (Brand: {} | Store: {}) score {}",
                        product.product_name, product.brand, product.store, product.score
                    )?;
                }
            }
        }
    }
    Ok(())
}
