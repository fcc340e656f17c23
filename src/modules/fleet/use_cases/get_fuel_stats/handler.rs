use std::sync::Arc;

use crate::modules::fleet::adapters::outbound::fleet_store::FleetStore;
use crate::modules::fleet::application::errors::ApplicationError;
use crate::modules::fleet::core::car::CarId;
use crate::modules::fleet::core::fuel_stats::FuelStats;

pub struct FuelStatsHandler {
    store: Arc<dyn FleetStore>,
}

impl FuelStatsHandler {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, car_id: CarId) -> Result<FuelStats, ApplicationError> {
        let stats = self
            .store
            .fuel_stats(car_id)
            .await?
            .ok_or(ApplicationError::CarNotFound(car_id))?;
        tracing::debug!(car_id, ?stats, "fuel stats computed");
        Ok(stats)
    }
}
