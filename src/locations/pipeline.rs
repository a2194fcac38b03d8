use crate::app_context::AppContext;
use crate::geocoder::{GeocodeError, Geocoder};
use crate::locations::consts::MAX_CITY_NAME_LENGTH;
use crate::locations::models::{Location, PlaceName, ValidationError};
use crate::locations::requests::SubmitLocationRequest;
use crate::locations::responses::{SubmitLocationErrorCode, SubmitLocationResponse};
use crate::locations::states;
use crate::map::consts::DEFAULT_JITTER_AMOUNT;
use crate::map::jitter::jitter;
use crate::map::models::LatLng;
use crate::storage::interface::ILocationStorage;
use unicode_segmentation::UnicodeSegmentation;

/// Validates a submission, resolves it to coordinates, perturbs them and
/// appends the result to the store. Exactly one append on success, none on
/// any failure path.
pub struct SubmissionPipeline<LS: ILocationStorage, G: Geocoder> {
    app_context: AppContext<LS, G>,
}

impl<LS, G> SubmissionPipeline<LS, G>
where
    LS: ILocationStorage,
    G: Geocoder,
{
    pub fn new(app_context: AppContext<LS, G>) -> Self {
        Self { app_context }
    }

    pub async fn submit(&self, request: SubmitLocationRequest) -> SubmitLocationResponse {
        let location = match self.build_location(request).await {
            Ok(location) => location,
            Err(response) => return response,
        };
        if let Err(error) = self.app_context.locations.append(&location).await {
            tracing::error!("Failed to append a location: {error}");
            return SubmitLocationResponse::refused(
                SubmitLocationErrorCode::StorageFailure,
                String::from("Failed to save the location. Please try again."),
            );
        }
        tracing::info!(
            city = location.place.city(),
            state = location.place.state(),
            lat = location.position.lat,
            lng = location.position.lng,
            "Location added.",
        );
        SubmitLocationResponse::added(&location)
    }

    async fn build_location(
        &self,
        request: SubmitLocationRequest,
    ) -> Result<Location, SubmitLocationResponse> {
        match request {
            SubmitLocationRequest::Place { city, state } => self.resolve_place(city, state).await,
            SubmitLocationRequest::Coordinates {
                latitude,
                longitude,
            } => parse_coordinates(&latitude, &longitude),
        }
    }

    async fn resolve_place(
        &self,
        city: String,
        state: String,
    ) -> Result<Location, SubmitLocationResponse> {
        let city = city.trim().to_string();
        let state = state.trim().to_string();
        if city.is_empty() {
            return Err(ValidationError::MissingField("city").into());
        }
        if state.is_empty() {
            return Err(ValidationError::MissingField("state").into());
        }
        if city.graphemes(true).count() > MAX_CITY_NAME_LENGTH {
            return Err(ValidationError::CityNameTooLong.into());
        }
        let state = match states::canonical(&state) {
            Some(canonical) => canonical.to_string(),
            None => return Err(ValidationError::UnknownState(state).into()),
        };
        let position = match self.app_context.geocoder.resolve(&city, &state).await {
            Ok(position) => position,
            Err(error) => {
                if let GeocodeError::ServiceFailure(reason) = &error {
                    tracing::error!("The geocoding service failed: {reason}");
                }
                return Err(error.into());
            }
        };
        Ok(Location {
            place: PlaceName::Named { city, state },
            position: jitter(position, DEFAULT_JITTER_AMOUNT),
        })
    }
}

fn parse_coordinates(latitude: &str, longitude: &str) -> Result<Location, SubmitLocationResponse> {
    let latitude = latitude.trim();
    let longitude = longitude.trim();
    if latitude.is_empty() {
        return Err(ValidationError::MissingField("latitude").into());
    }
    if longitude.is_empty() {
        return Err(ValidationError::MissingField("longitude").into());
    }
    let position = match (latitude.parse::<f64>(), longitude.parse::<f64>()) {
        (Ok(lat), Ok(lng)) if lat.is_finite() && lng.is_finite() => LatLng { lat, lng },
        _ => return Err(ValidationError::NotNumeric.into()),
    };
    if !(-90.0..=90.0).contains(&position.lat) || !(-180.0..=180.0).contains(&position.lng) {
        return Err(ValidationError::OutOfRange.into());
    }
    Ok(Location {
        place: PlaceName::Unnamed,
        position: jitter(position, DEFAULT_JITTER_AMOUNT),
    })
}
