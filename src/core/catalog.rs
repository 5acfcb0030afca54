use crate::domain::model::PlaceRecord;
use crate::utils::error::{FinderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct CategoryBucket {
    key: String,
    places: Vec<Arc<PlaceRecord>>,
}

/// Read-only table of places grouped under category keys.
///
/// Keys keep the order they were authored in, and so do the places under each
/// key. The same record may sit under several keys; the buckets then share
/// one `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    buckets: Vec<CategoryBucket>,
    index: HashMap<String, usize>,
    distinct: usize,
}

/// On-disk shape of a catalog file: an ordered list of categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryFile {
    pub key: String,
    pub places: Vec<PlaceRecord>,
}

impl PlaceCatalog {
    /// Groups `places` under each of `keys` by tag: a place lands under key
    /// `k` when it carries the tag `k`.
    pub fn from_tagged(keys: &[&str], places: Vec<PlaceRecord>) -> Self {
        let places: Vec<Arc<PlaceRecord>> = places.into_iter().map(Arc::new).collect();
        let buckets = keys.iter().map(|key| {
            let key = key.trim().to_lowercase();
            let members = places
                .iter()
                .filter(|p| p.has_tag(&key))
                .cloned()
                .collect::<Vec<_>>();
            (key, members)
        });
        Self::from_buckets(buckets)
    }

    /// Builds the catalog from explicit key/list pairs. A key given twice has
    /// its lists concatenated.
    pub fn from_buckets<I>(buckets: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Arc<PlaceRecord>>)>,
    {
        let mut catalog = PlaceCatalog::default();
        for (key, places) in buckets {
            let key = key.trim().to_lowercase();
            match catalog.index.get(&key) {
                Some(&i) => catalog.buckets[i].places.extend(places),
                None => {
                    catalog.index.insert(key.clone(), catalog.buckets.len());
                    catalog.buckets.push(CategoryBucket { key, places });
                }
            }
        }
        let distinct = {
            let mut seen = HashSet::new();
            catalog
                .iter()
                .filter(|&(_, p)| seen.insert(p.name.as_str()))
                .count()
        };
        catalog.distinct = distinct;
        catalog
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let files: Vec<CategoryFile> = serde_json::from_str(content)?;
        for file in &files {
            for place in file.places.iter().filter(|p| p.categories.is_empty()) {
                tracing::warn!(
                    "⚠️ Place '{}' under '{}' has no tags and can only be found by that key",
                    place.name,
                    file.key
                );
            }
        }
        let buckets = files
            .into_iter()
            .map(|f| (f.key, f.places.into_iter().map(Arc::new).collect()));
        Ok(Self::from_buckets(buckets))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FinderError::IoError)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded {} places in {} categories from {}",
            catalog.len(),
            catalog.category_count(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Category keys in authored order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&[Arc<PlaceRecord>]> {
        self.index
            .get(key)
            .map(|&i| self.buckets[i].places.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Every (key, place) pair: key order first, then list order within a key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<PlaceRecord>)> {
        self.buckets
            .iter()
            .flat_map(|b| b.places.iter().map(move |p| (b.key.as_str(), p)))
    }

    /// Flattened list of distinct places (by name) in catalog iteration order.
    pub fn places(&self) -> Vec<Arc<PlaceRecord>> {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|&(_, p)| seen.insert(p.name.as_str()))
            .map(|(_, p)| Arc::clone(p))
            .collect()
    }

    /// Number of distinct places.
    pub fn len(&self) -> usize {
        self.distinct
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|b| b.places.is_empty())
    }

    pub fn category_count(&self) -> usize {
        self.buckets.len()
    }
}
