use crate::core::catalog::PlaceCatalog;
use crate::domain::model::PlaceRecord;
use crate::utils::error::{FinderError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

/// How tags are compared with the query when no category key matches exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackMode {
    /// Tag contains the query, or the query contains the tag.
    #[default]
    Substring,
    /// Same test applied word by word, anchored at word starts.
    WordPrefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Direct,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub query: String,
    pub kind: MatchKind,
    pub places: Vec<Arc<PlaceRecord>>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.places.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn message(&self) -> String {
        match self.places.len() {
            0 => format!("No results for \"{}\"", self.query),
            1 => format!("Found 1 place for \"{}\"", self.query),
            n => format!("Found {} places for \"{}\"", n, self.query),
        }
    }
}

pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

fn words(s: &str) -> Vec<&str> {
    static SPLITTER: OnceLock<Regex> = OnceLock::new();
    let re = SPLITTER.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid word splitter"));
    re.split(s).filter(|w| !w.is_empty()).collect()
}

fn all_prefixed(needles: &[&str], hay: &[&str]) -> bool {
    !needles.is_empty() && needles.iter().all(|n| hay.iter().any(|h| h.starts_with(n)))
}

impl FallbackMode {
    pub fn tag_matches(&self, query: &str, tag: &str) -> bool {
        match self {
            FallbackMode::Substring => tag.contains(query) || query.contains(tag),
            FallbackMode::WordPrefix => {
                let query_words = words(query);
                let tag_words = words(tag);
                all_prefixed(&query_words, &tag_words) || all_prefixed(&tag_words, &query_words)
            }
        }
    }
}

/// Resolves free text into catalog places: exact category key first, tag
/// matching over the whole catalog second.
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    catalog: Arc<PlaceCatalog>,
    mode: FallbackMode,
}

impl SearchMatcher {
    pub fn new(catalog: Arc<PlaceCatalog>) -> Self {
        Self::with_mode(catalog, FallbackMode::default())
    }

    pub fn with_mode(catalog: Arc<PlaceCatalog>, mode: FallbackMode) -> Self {
        Self { catalog, mode }
    }

    pub fn catalog(&self) -> &PlaceCatalog {
        &self.catalog
    }

    pub fn mode(&self) -> FallbackMode {
        self.mode
    }

    pub fn search(&self, query: &str) -> Result<SearchOutcome> {
        let query = normalize(query);
        if query.is_empty() {
            return Err(FinderError::EmptyQuery);
        }

        if let Some(places) = self.catalog.get(&query) {
            tracing::debug!("Direct hit on category '{}' ({} places)", query, places.len());
            return Ok(SearchOutcome {
                places: dedup_by_name(places.iter()),
                query,
                kind: MatchKind::Direct,
            });
        }

        let candidates = self
            .catalog
            .iter()
            .map(|(_, place)| place)
            .filter(|place| place.categories.iter().any(|tag| self.mode.tag_matches(&query, tag)));
        let places = dedup_by_name(candidates);
        tracing::debug!(
            "Fallback match for '{}' ({:?}) found {} places",
            query,
            self.mode,
            places.len()
        );

        Ok(SearchOutcome {
            query,
            kind: MatchKind::Fallback,
            places,
        })
    }
}

fn dedup_by_name<'a>(places: impl Iterator<Item = &'a Arc<PlaceRecord>>) -> Vec<Arc<PlaceRecord>> {
    let mut seen = HashSet::new();
    places
        .filter(|&p| seen.insert(p.name.as_str()))
        .map(Arc::clone)
        .collect()
}
