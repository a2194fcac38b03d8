use crate::map::consts::{FALLBACK_CENTER, FALLBACK_VIEWPORT_SPAN, VIEWPORT_ZOOM};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Clamps both axes to the valid degree ranges.
    pub fn clamped(self) -> Self {
        LatLng {
            lat: self.lat.clamp(-90.0, 90.0),
            lng: self.lng.clamp(-180.0, 180.0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.south + self.north) / 2.0,
            lng: (self.west + self.east) / 2.0,
        }
    }
}

/// The fixed frame the map is rendered in, regardless of how far out
/// any submitted point lands.
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub bounds: BoundingBox,
}

/// The geographic region of interest: an outline polygon loaded once at
/// startup, never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Region {
    outline: Vec<LatLng>,
}

impl Region {
    pub fn new(outline: Vec<LatLng>) -> Self {
        Region { outline }
    }

    pub fn outline(&self) -> &[LatLng] {
        &self.outline
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.outline.first()?;
        let mut bounds = BoundingBox {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        for point in &self.outline[1..] {
            bounds.south = bounds.south.min(point.lat);
            bounds.west = bounds.west.min(point.lng);
            bounds.north = bounds.north.max(point.lat);
            bounds.east = bounds.east.max(point.lng);
        }
        Some(bounds)
    }

    pub fn viewport(&self) -> Viewport {
        match self.bounding_box() {
            Some(bounds) => Viewport {
                center: bounds.center(),
                zoom: VIEWPORT_ZOOM,
                bounds,
            },
            None => Viewport {
                center: FALLBACK_CENTER,
                zoom: VIEWPORT_ZOOM,
                bounds: BoundingBox {
                    south: FALLBACK_CENTER.lat - FALLBACK_VIEWPORT_SPAN,
                    west: FALLBACK_CENTER.lng - FALLBACK_VIEWPORT_SPAN,
                    north: FALLBACK_CENTER.lat + FALLBACK_VIEWPORT_SPAN,
                    east: FALLBACK_CENTER.lng + FALLBACK_VIEWPORT_SPAN,
                },
            },
        }
    }
}
