use thiserror::Error;

pub mod interface;
pub mod locations;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open the locations database: {0}")]
    OpenFailure(#[source] sqlx::Error),
    #[error("failed to append the location: {0}")]
    WriteFailure(#[source] sqlx::Error),
    #[error("failed to read stored locations: {0}")]
    ReadFailure(#[source] sqlx::Error),
}
