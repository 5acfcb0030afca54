use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

// north and east are positive numbers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub address: String,
    pub description: String,
    pub coordinates: Coordinates,
    #[serde(deserialize_with = "lowercase_tags")]
    pub categories: BTreeSet<String>,
}

fn lowercase_tags<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Vec::<String>::deserialize(deserializer)?;
    Ok(tags.iter().map(|t| t.trim().to_lowercase()).collect())
}

impl PlaceRecord {
    pub fn new(
        name: &str,
        address: &str,
        description: &str,
        coordinates: (f64, f64),
        categories: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            description: description.to_string(),
            coordinates: Coordinates {
                lat: coordinates.0,
                lon: coordinates.1,
            },
            categories: categories.iter().map(|c| c.trim().to_lowercase()).collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.categories.contains(tag)
    }
}

/// One point annotation handed to the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub name: String,
    pub description: String,
    pub address: String,
    pub coordinates: Coordinates,
}

impl From<&PlaceRecord> for Marker {
    fn from(place: &PlaceRecord) -> Self {
        Self {
            name: place.name.clone(),
            description: place.description.clone(),
            address: place.address.clone(),
            coordinates: place.coordinates,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn around<'a>(points: impl IntoIterator<Item = &'a Coordinates>) -> Option<Self> {
        points.into_iter().fold(None, |acc, c| {
            Some(match acc {
                None => Bounds {
                    south: c.lat,
                    west: c.lon,
                    north: c.lat,
                    east: c.lon,
                },
                Some(b) => Bounds {
                    south: b.south.min(c.lat),
                    west: b.west.min(c.lon),
                    north: b.north.max(c.lat),
                    east: b.east.max(c.lon),
                },
            })
        })
    }
}

/// Rendering instruction for the map: clear old markers, draw these, fit `bounds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSet {
    pub query: String,
    pub message: String,
    pub bounds: Option<Bounds>,
    pub markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new(query: String, message: String, markers: Vec<Marker>) -> Self {
        let bounds = Bounds::around(markers.iter().map(|m| &m.coordinates));
        Self {
            query,
            message,
            bounds,
            markers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub user_id: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmfulProduct {
    pub product_name: String,
    pub store: String,
    pub brand: String,
    pub score: f64,
}

/// Raw leaderboard data as produced by the export job, before ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardSnapshot {
    pub entries: Vec<ScoreEntry>,
    pub harmful_products: Vec<HarmfulProduct>,
    pub fetched_at: DateTime<Utc>,
}
