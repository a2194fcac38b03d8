use crate::map::models::LatLng;

/// Default perturbation, in degrees, applied to every accepted submission so
/// that markers resolved to the same centroid don't coincide on the map.
pub const DEFAULT_JITTER_AMOUNT: f64 = 0.05;

pub const VIEWPORT_ZOOM: u8 = 7;

/// Center of the map when no boundary outline is available.
pub const FALLBACK_CENTER: LatLng = LatLng {
    lat: 35.0020,
    lng: -98.5000,
};

pub const FALLBACK_VIEWPORT_SPAN: f64 = 3.0;
