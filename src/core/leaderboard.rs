use crate::domain::model::{HarmfulProduct, LeaderboardSnapshot, ScoreEntry};
use crate::domain::ports::LeaderboardSource;
use crate::utils::error::Result;
use serde::Serialize;
use std::cmp::Ordering;

pub const DEFAULT_HARMFUL_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub position: usize,
    pub user_id: String,
    pub score: f64,
}

impl Standing {
    pub fn rank_label(&self) -> String {
        match self.position {
            1 => "🥇".to_string(),
            2 => "🥈".to_string(),
            3 => "🥉".to_string(),
            n => n.to_string(),
        }
    }

    pub fn score_label(&self) -> String {
        format!("{:.2} points", self.score)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub standings: Vec<Standing>,
    /// Lowest-scoring purchases first: the ones worth replacing.
    pub harmful_products: Vec<HarmfulProduct>,
}

fn by_score_desc(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score.total_cmp(&a.score)
}

impl Leaderboard {
    pub fn from_snapshot(snapshot: LeaderboardSnapshot, harmful_limit: usize) -> Self {
        let mut entries = snapshot.entries;
        entries.sort_by(by_score_desc);
        let standings = entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| Standing {
                position: i + 1,
                user_id: e.user_id,
                score: e.score,
            })
            .collect();

        let mut harmful_products = snapshot.harmful_products;
        harmful_products.sort_by(|a, b| a.score.total_cmp(&b.score));
        harmful_products.truncate(harmful_limit);

        Self {
            standings,
            harmful_products,
        }
    }

    pub async fn load(source: &dyn LeaderboardSource, harmful_limit: usize) -> Result<Self> {
        tracing::debug!("Fetching leaderboard from {}", source.describe());
        let snapshot = source.fetch().await?;
        tracing::info!(
            "Fetched {} scores and {} products",
            snapshot.entries.len(),
            snapshot.harmful_products.len()
        );
        Ok(Self::from_snapshot(snapshot, harmful_limit))
    }

    pub fn position_of(&self, user_id: &str) -> Option<&Standing> {
        self.standings.iter().find(|s| s.user_id == user_id)
    }
}
