use crate::locations::models::Location;
use crate::storage::StorageError;
use async_trait::async_trait;

pub trait ILocationStorage: LocationRepo + Clone + Send + Sync + 'static {}

#[async_trait]
pub trait LocationRepo {
    /// Adds a location to the end of the stored sequence.
    async fn append(&self, location: &Location) -> Result<(), StorageError>;

    /// Returns every stored location in insertion order.
    async fn all(&self) -> Result<Vec<Location>, StorageError>;
}
