use crate::geocoder::{GeocodeError, Geocoder};
use crate::map::models::LatLng;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct NominatimGeocoder {
    http_client: Client,
    base_url: Url,
}

/// A single place in a Nominatim search response. Nominatim serializes
/// coordinates as strings.
#[derive(Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: Url) -> Self {
        let http_client = Client::builder()
            .user_agent(concat!("blue-dots-server / ", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build the HTTP client.");
        NominatimGeocoder {
            http_client,
            base_url,
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, city: &str, state: &str) -> Result<LatLng, GeocodeError> {
        let url = self
            .base_url
            .join("search")
            .map_err(|error| GeocodeError::ServiceFailure(error.to_string()))?;
        let query = format!("{city}, {state}, USA");
        let places: Vec<NominatimPlace> = self
            .http_client
            .get(url)
            .query(&[("q", query.as_str()), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await
            .map_err(|error| GeocodeError::ServiceFailure(error.to_string()))?
            .error_for_status()
            .map_err(|error| GeocodeError::ServiceFailure(error.to_string()))?
            .json()
            .await
            .map_err(|error| GeocodeError::ServiceFailure(error.to_string()))?;
        let place = places.into_iter().next().ok_or(GeocodeError::NotFound)?;
        parse_coordinates(&place)
    }
}

fn parse_coordinates(place: &NominatimPlace) -> Result<LatLng, GeocodeError> {
    let parsed = place
        .lat
        .parse::<f64>()
        .and_then(|lat| place.lon.parse::<f64>().map(|lng| LatLng { lat, lng }));
    parsed.map_err(|_| {
        GeocodeError::ServiceFailure(format!(
            "malformed coordinates in the response: ({}, {})",
            place.lat, place.lon,
        ))
    })
}
