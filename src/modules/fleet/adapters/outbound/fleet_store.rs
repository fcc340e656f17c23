// Port for the fleet's authoritative car data.
//
// Purpose
// - Let use case handlers and the HTTP layer work against a trait, so the
//   in-memory adapter can be swapped without touching them.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::fleet::core::car::{Car, CarId};
use crate::modules::fleet::core::fuel_entry::FuelEntry;
use crate::modules::fleet::core::fuel_stats::FuelStats;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait FleetStore: Send + Sync {
    /// Issues the next id and stores a car with no fuel entries.
    async fn create_car(&self, brand: String, model: String, year: i32)
    -> Result<Car, StoreError>;

    async fn list_cars(&self) -> Result<Vec<Car>, StoreError>;

    /// Returns `false` when the car does not exist; nothing is written then.
    async fn add_fuel_entry(&self, car_id: CarId, entry: FuelEntry) -> Result<bool, StoreError>;

    /// A point-in-time copy of the car's fuel history.
    async fn fuel_entries(&self, car_id: CarId) -> Result<Option<Vec<FuelEntry>>, StoreError>;

    async fn fuel_stats(&self, car_id: CarId) -> Result<Option<FuelStats>, StoreError> {
        let entries = self.fuel_entries(car_id).await?;
        Ok(entries.map(|entries| FuelStats::from_entries(&entries)))
    }
}
