use crate::map::models::{LatLng, Region};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// A GeoJSON `Polygon` geometry. Only the outer ring is used; coordinates
/// come in GeoJSON `[longitude, latitude]` order.
#[derive(Deserialize)]
struct PolygonGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("failed to read the boundary file: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("failed to parse the boundary file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported geometry type `{0}`, expected `Polygon`")]
    UnsupportedGeometry(String),
    #[error("the boundary polygon has no points")]
    EmptyPolygon,
}

pub fn load(path: &Path) -> Result<Region, BoundaryError> {
    let raw = fs::read_to_string(path)?;
    let geometry: PolygonGeometry = serde_json::from_str(&raw)?;
    if geometry.kind != "Polygon" {
        return Err(BoundaryError::UnsupportedGeometry(geometry.kind));
    }
    let ring = geometry
        .coordinates
        .into_iter()
        .next()
        .filter(|ring| !ring.is_empty())
        .ok_or(BoundaryError::EmptyPolygon)?;
    let outline = ring
        .into_iter()
        .map(|[lng, lat]| LatLng { lat, lng })
        .collect();
    tracing::info!("Loaded the boundary polygon from {}.", path.display());
    Ok(Region::new(outline))
}
