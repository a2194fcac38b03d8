use crate::map::models::{LatLng, Viewport};
use crate::map::projection::Marker;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<MapViewResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Vec<LatLng>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<Marker>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MapViewResponseError {
    StorageFailure,
}
