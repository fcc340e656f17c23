use std::sync::Arc;

use crate::modules::fleet::adapters::outbound::fleet_store::FleetStore;
use crate::modules::fleet::application::errors::ApplicationError;
use crate::modules::fleet::core::car::Car;

pub struct ListCarsHandler {
    store: Arc<dyn FleetStore>,
}

impl ListCarsHandler {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Car>, ApplicationError> {
        let cars = self.store.list_cars().await?;
        tracing::debug!(count = cars.len(), "listing cars");
        Ok(cars)
    }
}
