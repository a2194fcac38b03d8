use crate::geocoder::GeocodeError;
use crate::locations::models::{Location, ValidationError};
use crate::map::projection::CountRow;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRow {
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Location> for LocationRow {
    fn from(location: &Location) -> Self {
        LocationRow {
            city: location.place.city().to_string(),
            state: location.place.state().to_string(),
            latitude: location.position.lat,
            longitude: location.position.lng,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLocationResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SubmitLocationErrorCode>,
    /// Human-readable explanation of a refused submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationRow>,
}

impl SubmitLocationResponse {
    pub fn added(location: &Location) -> Self {
        SubmitLocationResponse {
            error: false,
            error_code: None,
            message: None,
            location: Some(LocationRow::from(location)),
        }
    }

    pub fn refused(error_code: SubmitLocationErrorCode, message: String) -> Self {
        SubmitLocationResponse {
            error: true,
            error_code: Some(error_code),
            message: Some(message),
            location: None,
        }
    }
}

/// All possible reasons why a submission may be refused.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitLocationErrorCode {
    MissingField,
    NotNumeric,
    OutOfRange,
    UnknownState,
    CityNameTooLong,
    PlaceNotFound,
    GeocoderUnavailable,
    StorageFailure,
}

impl From<ValidationError> for SubmitLocationResponse {
    fn from(error: ValidationError) -> Self {
        let error_code = match &error {
            ValidationError::MissingField(_) => SubmitLocationErrorCode::MissingField,
            ValidationError::NotNumeric => SubmitLocationErrorCode::NotNumeric,
            ValidationError::OutOfRange => SubmitLocationErrorCode::OutOfRange,
            ValidationError::UnknownState(_) => SubmitLocationErrorCode::UnknownState,
            ValidationError::CityNameTooLong => SubmitLocationErrorCode::CityNameTooLong,
        };
        SubmitLocationResponse::refused(error_code, error.to_string())
    }
}

impl From<GeocodeError> for SubmitLocationResponse {
    fn from(error: GeocodeError) -> Self {
        match error {
            GeocodeError::NotFound => SubmitLocationResponse::refused(
                SubmitLocationErrorCode::PlaceNotFound,
                String::from("Could not find the location. Please check the city and state."),
            ),
            GeocodeError::ServiceFailure(_) => SubmitLocationResponse::refused(
                SubmitLocationErrorCode::GeocoderUnavailable,
                String::from("The geocoding service is unavailable. Please try again later."),
            ),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<LocationsResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<LocationRow>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationsResponseError {
    StorageFailure,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SummaryResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<CountRow>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryResponseError {
    StorageFailure,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatesResponse {
    pub states: Vec<&'static str>,
    pub default_state: &'static str,
}
