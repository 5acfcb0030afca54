use crate::domain::model::MarkerSet;
use crate::domain::ports::MapRenderer;
use crate::utils::error::{FinderError, Result};
use std::io::Write;

/// Writes each marker set as one JSON document, for a web map to pick up.
pub struct JsonRenderer<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, pretty: true }
    }

    pub fn compact(out: W) -> Self {
        Self { out, pretty: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MapRenderer for JsonRenderer<W> {
    fn render(&mut self, markers: &MarkerSet) -> Result<()> {
        let doc = if self.pretty {
            serde_json::to_string_pretty(markers)?
        } else {
            serde_json::to_string(markers)?
        };
        writeln!(self.out, "{}", doc)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Plain listing for a terminal.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MapRenderer for TextRenderer<W> {
    fn render(&mut self, markers: &MarkerSet) -> Result<()> {
        let write = |out: &mut W| -> std::io::Result<()> {
            writeln!(out, "{}", markers.message)?;
            for (i, m) in markers.markers.iter().enumerate() {
                writeln!(out, "{:>3}. {}", i + 1, m.name)?;
                writeln!(out, "     {}", m.address)?;
                writeln!(out, "     {}", m.description)?;
                writeln!(
                    out,
                    "     ({:.4}, {:.4})",
                    m.coordinates.lat, m.coordinates.lon
                )?;
            }
            out.flush()
        };
        write(&mut self.out).map_err(|e| FinderError::RenderError {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Coordinates, Marker};

    fn markers() -> MarkerSet {
        MarkerSet::new(
            "refill".to_string(),
            "Found 1 place for \"refill\"".to_string(),
            vec![Marker {
                name: "Terra Refillery".to_string(),
                description: "Refill station".to_string(),
                address: "180 Nassau St".to_string(),
                coordinates: Coordinates {
                    lat: 40.3513,
                    lon: -74.6563,
                },
            }],
        )
    }

    #[test]
    fn test_json_renderer_writes_document() {
        let mut renderer = JsonRenderer::compact(Vec::new());
        renderer.render(&markers()).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["query"], "refill");
        assert_eq!(value["markers"][0]["name"], "Terra Refillery");
        assert_eq!(value["markers"][0]["coordinates"]["lat"], 40.3513);
        assert_eq!(value["bounds"]["north"], 40.3513);
    }

    #[test]
    fn test_json_renderer_empty_set() {
        let mut renderer = JsonRenderer::new(Vec::new());
        let empty = MarkerSet::new("zzz".to_string(), "No results for \"zzz\"".to_string(), vec![]);
        renderer.render(&empty).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert!(value["bounds"].is_null());
        assert_eq!(value["markers"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_text_renderer_lists_places() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&markers()).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.starts_with("Found 1 place for \"refill\""));
        assert!(out.contains("  1. Terra Refillery"));
        assert!(out.contains("(40.3513, -74.6563)"));
    }
}
