pub mod catalog;
pub mod embedded;
pub mod finder;
pub mod leaderboard;
pub mod matcher;

pub use crate::domain::model::{Marker, MarkerSet, PlaceRecord};
pub use crate::domain::ports::{LeaderboardSource, MapRenderer};
pub use crate::utils::error::Result;
