use crate::core::matcher::{MatchKind, SearchMatcher};
use crate::domain::model::{Marker, MarkerSet};
use crate::domain::ports::MapRenderer;
use crate::utils::error::Result;

/// What the person who searched gets back once the map has been updated.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub kind: MatchKind,
    pub markers: MarkerSet,
}

impl SearchReport {
    pub fn message(&self) -> &str {
        &self.markers.message
    }

    pub fn found(&self) -> usize {
        self.markers.markers.len()
    }
}

pub struct PlaceFinder<R: MapRenderer> {
    matcher: SearchMatcher,
    renderer: R,
}

impl<R: MapRenderer> PlaceFinder<R> {
    pub fn new(matcher: SearchMatcher, renderer: R) -> Self {
        Self { matcher, renderer }
    }

    /// Runs a search and hands the result to the renderer, including an empty
    /// result. An empty query fails before anything is rendered.
    pub fn submit(&mut self, query: &str) -> Result<SearchReport> {
        let outcome = self.matcher.search(query)?;
        let message = outcome.message();
        tracing::info!("{}", message);

        let markers = outcome.places.iter().map(|p| Marker::from(&**p)).collect();
        let markers = MarkerSet::new(outcome.query.clone(), message, markers);
        self.renderer.render(&markers)?;

        Ok(SearchReport {
            kind: outcome.kind,
            markers,
        })
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
