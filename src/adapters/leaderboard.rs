use crate::domain::model::{HarmfulProduct, LeaderboardSnapshot, ScoreEntry};
use crate::domain::ports::LeaderboardSource;
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Both shapes the export job has written over time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LeaderboardDocument {
    Scores(Vec<ScoreEntry>),
    Report {
        leaderboard: Vec<ScoreEntry>,
        #[serde(default, alias = "harmful_products_user_001")]
        harmful_products: Vec<HarmfulProduct>,
    },
}

pub fn parse_leaderboard(data: &[u8]) -> Result<LeaderboardSnapshot> {
    let (entries, harmful_products) = match serde_json::from_slice(data)? {
        LeaderboardDocument::Scores(entries) => (entries, Vec::new()),
        LeaderboardDocument::Report {
            leaderboard,
            harmful_products,
        } => (leaderboard, harmful_products),
    };
    Ok(LeaderboardSnapshot {
        entries,
        harmful_products,
        fetched_at: Utc::now(),
    })
}

#[derive(Debug, Clone)]
pub struct JsonFileLeaderboard {
    path: PathBuf,
}

impl JsonFileLeaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LeaderboardSource for JsonFileLeaderboard {
    async fn fetch(&self) -> Result<LeaderboardSnapshot> {
        let data = tokio::fs::read(&self.path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), self.path.display());
        parse_leaderboard(&data)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[derive(Debug, Clone)]
pub struct HttpLeaderboard {
    client: Client,
    endpoint: String,
}

impl HttpLeaderboard {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl LeaderboardSource for HttpLeaderboard {
    async fn fetch(&self) -> Result<LeaderboardSnapshot> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(FinderError::SourceStatusError {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        parse_leaderboard(&body)
    }

    fn describe(&self) -> String {
        format!("endpoint {}", self.endpoint)
    }
}
