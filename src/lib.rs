pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;
pub use config::AppConfig;

pub use adapters::{HttpLeaderboard, JsonFileLeaderboard, JsonRenderer, TextRenderer};
pub use crate::core::{
    catalog::PlaceCatalog,
    embedded::embedded_catalog,
    finder::{PlaceFinder, SearchReport},
    leaderboard::Leaderboard,
    matcher::{FallbackMode, MatchKind, SearchMatcher, SearchOutcome},
};
pub use utils::error::{FinderError, Result};
