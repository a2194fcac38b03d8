use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(default_value = "locations.sqlite3")]
    pub database: PathBuf,
    #[arg(long)]
    #[arg(default_value = "boundary.example.json")]
    pub boundary: PathBuf,
    #[arg(long)]
    #[arg(default_value = "https://nominatim.openstreetmap.org")]
    pub geocoder_url: Url,
}
