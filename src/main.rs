use crate::app_context::AppContext;
use clap::Parser;

mod app_context;
mod cli;
mod geocoder;
mod health;
mod http;
mod locations;
mod logging;
mod map;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init();

    let region = map::boundary::load(&args.boundary).expect("Failed to load the boundary polygon.");
    let locations = storage::locations::SqliteLocationStorage::open(&args.database)
        .await
        .expect("Failed to open the locations database.");
    let geocoder = geocoder::nominatim::NominatimGeocoder::new(args.geocoder_url.clone());
    let app_context = AppContext {
        locations,
        geocoder,
        region,
    };

    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}...", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to run the HTTP server.");
}
