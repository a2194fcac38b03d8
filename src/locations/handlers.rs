use crate::app_context::AppContext;
use crate::geocoder::Geocoder;
use crate::locations::pipeline::SubmissionPipeline;
use crate::locations::requests::SubmitLocationRequest;
use crate::locations::responses::{
    LocationRow, LocationsResponse, LocationsResponseError, StatesResponse, SubmitLocationResponse,
    SummaryResponse, SummaryResponseError,
};
use crate::locations::states::{DEFAULT_STATE, STATES};
use crate::map::projection;
use crate::storage::interface::ILocationStorage;
use axum::extract::State;
use axum::response::Json;

pub async fn submit<LS, G>(
    State(app_context): State<AppContext<LS, G>>,
    Json(request): Json<SubmitLocationRequest>,
) -> Json<SubmitLocationResponse>
where
    LS: ILocationStorage,
    G: Geocoder,
{
    Json(SubmissionPipeline::new(app_context).submit(request).await)
}

pub async fn list<LS, G>(State(app_context): State<AppContext<LS, G>>) -> Json<LocationsResponse>
where
    LS: ILocationStorage,
    G: Geocoder,
{
    match app_context.locations.all().await {
        Ok(locations) => Json(LocationsResponse {
            error: false,
            error_code: None,
            locations: Some(locations.iter().map(LocationRow::from).collect()),
        }),
        Err(error) => {
            tracing::error!("Failed to read stored locations: {error}");
            Json(LocationsResponse {
                error: true,
                error_code: Some(LocationsResponseError::StorageFailure),
                locations: None,
            })
        }
    }
}

pub async fn summary<LS, G>(State(app_context): State<AppContext<LS, G>>) -> Json<SummaryResponse>
where
    LS: ILocationStorage,
    G: Geocoder,
{
    match app_context.locations.all().await {
        Ok(locations) => Json(SummaryResponse {
            error: false,
            error_code: None,
            rows: Some(projection::count_summary(&locations)),
        }),
        Err(error) => {
            tracing::error!("Failed to read stored locations: {error}");
            Json(SummaryResponse {
                error: true,
                error_code: Some(SummaryResponseError::StorageFailure),
                rows: None,
            })
        }
    }
}

#[axum::debug_handler]
pub async fn states() -> Json<StatesResponse> {
    Json(StatesResponse {
        states: STATES.to_vec(),
        default_state: DEFAULT_STATE,
    })
}
