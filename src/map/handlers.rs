use crate::app_context::AppContext;
use crate::geocoder::Geocoder;
use crate::map::projection;
use crate::map::responses::{MapViewResponse, MapViewResponseError};
use crate::storage::interface::ILocationStorage;
use axum::extract::State;
use axum::response::Json;

pub async fn view<LS, G>(State(app_context): State<AppContext<LS, G>>) -> Json<MapViewResponse>
where
    LS: ILocationStorage,
    G: Geocoder,
{
    let locations = match app_context.locations.all().await {
        Ok(locations) => locations,
        Err(error) => {
            tracing::error!("Failed to read stored locations: {error}");
            return Json(MapViewResponse {
                error: true,
                error_code: Some(MapViewResponseError::StorageFailure),
                viewport: None,
                outline: None,
                markers: None,
            });
        }
    };
    Json(MapViewResponse {
        error: false,
        error_code: None,
        viewport: Some(app_context.region.viewport()),
        outline: Some(app_context.region.outline().to_vec()),
        markers: Some(projection::markers(&locations)),
    })
}
