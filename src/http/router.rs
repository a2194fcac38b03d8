use crate::app_context::AppContext;
use crate::cli::Args;
use crate::geocoder::Geocoder;
use crate::http::{cors, middleware};
use crate::storage::interface::ILocationStorage;
use crate::{health, locations, map};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new<LS, G>(args: &Args, app_context: AppContext<LS, G>) -> Router
where
    LS: ILocationStorage,
    G: Geocoder,
{
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let locations_routes = Router::new()
        .route(
            "/",
            post(locations::handlers::submit::<LS, G>).get(locations::handlers::list::<LS, G>),
        )
        .route("/summary", get(locations::handlers::summary::<LS, G>))
        .route("/states", get(locations::handlers::states));
    let map_routes = Router::new().route("/view", get(map::handlers::view::<LS, G>));

    Router::new()
        .nest("/health", health_routes)
        .nest("/locations", locations_routes)
        .nest("/map", map_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
