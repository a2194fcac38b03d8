use crate::map::models::LatLng;
use async_trait::async_trait;
use thiserror::Error;

pub mod nominatim;

#[derive(Debug, Error, PartialEq)]
pub enum GeocodeError {
    #[error("no matching place was found")]
    NotFound,
    #[error("geocoding service error: {0}")]
    ServiceFailure(String),
}

#[async_trait]
pub trait Geocoder: Clone + Send + Sync + 'static {
    /// Resolves a city/state pair to coordinates with exactly one lookup
    /// request. Never retried.
    async fn resolve(&self, city: &str, state: &str) -> Result<LatLng, GeocodeError>;
}
