use crate::map::models::LatLng;
use thiserror::Error;

/// Display and storage encoding of a coordinate-only submission.
pub const COORDINATE_ONLY_LABEL: &str = "N/A";

/// How a submitted point was named. Coordinate-only submissions carry no
/// place name at all instead of a sentinel string, so a city literally
/// called "N/A" could still be told apart at this level.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaceName {
    Named { city: String, state: String },
    Unnamed,
}

impl PlaceName {
    /// Rebuilds the variant from the stored display labels.
    pub fn from_labels(city: String, state: String) -> Self {
        if city == COORDINATE_ONLY_LABEL && state == COORDINATE_ONLY_LABEL {
            PlaceName::Unnamed
        } else {
            PlaceName::Named { city, state }
        }
    }

    pub fn city(&self) -> &str {
        match self {
            PlaceName::Named { city, .. } => city,
            PlaceName::Unnamed => COORDINATE_ONLY_LABEL,
        }
    }

    pub fn state(&self) -> &str {
        match self {
            PlaceName::Named { state, .. } => state,
            PlaceName::Unnamed => COORDINATE_ONLY_LABEL,
        }
    }
}

/// A single accepted submission. Created once, never updated or deleted;
/// the position is already jittered.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub place: PlaceName,
    pub position: LatLng,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Please enter a value for {0}.")]
    MissingField(&'static str),
    #[error("Please enter valid numerical values for latitude and longitude.")]
    NotNumeric,
    #[error("Latitude must be between -90 and 90 and longitude between -180 and 180.")]
    OutOfRange,
    #[error("`{0}` is not a recognized US state.")]
    UnknownState(String),
    #[error("The city name is too long.")]
    CityNameTooLong,
}
