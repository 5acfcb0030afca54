// Adapters layer: concrete implementations for external systems (files, http, map output).

pub mod leaderboard;
pub mod render;

pub use leaderboard::{HttpLeaderboard, JsonFileLeaderboard};
pub use render::{JsonRenderer, TextRenderer};
