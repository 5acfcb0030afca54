use crate::domain::model::{LeaderboardSnapshot, MarkerSet};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Map surface that draws search results. Implementations clear prior markers
/// and show their own empty-state when handed an empty set.
pub trait MapRenderer {
    fn render(&mut self, markers: &MarkerSet) -> Result<()>;
}

#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    async fn fetch(&self) -> Result<LeaderboardSnapshot>;

    fn describe(&self) -> String;
}
