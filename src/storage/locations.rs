use crate::locations::models::{Location, PlaceName};
use crate::map::models::LatLng;
use crate::storage::interface::{ILocationStorage, LocationRepo};
use crate::storage::StorageError;
use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, FromRow, SqliteConnection};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

// language=sqlite
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS locations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        city TEXT NOT NULL,
        state TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    )
";

/// Durable append-only location store on a single SQLite connection.
/// The connection is opened once per session and shared behind a mutex;
/// concurrent multi-process access is not supported.
#[derive(Clone)]
pub struct SqliteLocationStorage {
    connection: Arc<Mutex<SqliteConnection>>,
}

#[derive(FromRow)]
struct LocationRecord {
    city: String,
    state: String,
    latitude: f64,
    longitude: f64,
}

impl SqliteLocationStorage {
    /// Opens the backing database, creating the file and the schema when
    /// missing. Safe to call against an already populated file.
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        let mut connection = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(path)
            .connect()
            .await
            .map_err(StorageError::OpenFailure)?;
        sqlx::query(SCHEMA)
            .execute(&mut connection)
            .await
            .map_err(StorageError::OpenFailure)?;
        tracing::info!("Opened the locations database at `{}`.", path.display());
        Ok(SqliteLocationStorage {
            connection: Arc::new(Mutex::new(connection)),
        })
    }
}

impl ILocationStorage for SqliteLocationStorage {}

#[async_trait]
impl LocationRepo for SqliteLocationStorage {
    async fn append(&self, location: &Location) -> Result<(), StorageError> {
        // language=sqlite
        const QUERY: &str =
            "INSERT INTO locations (city, state, latitude, longitude) VALUES (?1, ?2, ?3, ?4)";
        let mut connection = self.connection.lock().await;
        sqlx::query(QUERY)
            .bind(location.place.city())
            .bind(location.place.state())
            .bind(location.position.lat)
            .bind(location.position.lng)
            .execute(&mut *connection)
            .await
            .map_err(StorageError::WriteFailure)?;
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Location>, StorageError> {
        // language=sqlite
        const QUERY: &str = "SELECT city, state, latitude, longitude FROM locations ORDER BY id";
        let mut connection = self.connection.lock().await;
        let records: Vec<LocationRecord> = sqlx::query_as(QUERY)
            .fetch_all(&mut *connection)
            .await
            .map_err(StorageError::ReadFailure)?;
        Ok(records.into_iter().map(Location::from).collect())
    }
}

impl From<LocationRecord> for Location {
    fn from(record: LocationRecord) -> Self {
        Location {
            place: PlaceName::from_labels(record.city, record.state),
            position: LatLng {
                lat: record.latitude,
                lng: record.longitude,
            },
        }
    }
}
