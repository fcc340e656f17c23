use std::sync::Arc;

use crate::modules::fleet::adapters::outbound::fleet_store::FleetStore;
use crate::modules::fleet::application::errors::ApplicationError;
use crate::modules::fleet::core::car::Car;
use crate::modules::fleet::use_cases::create_car::command::CreateCar;

pub struct CreateCarHandler {
    store: Arc<dyn FleetStore>,
}

impl CreateCarHandler {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CreateCar) -> Result<Car, ApplicationError> {
        let car = self
            .store
            .create_car(command.brand, command.model, command.year)
            .await?;
        tracing::info!(car_id = car.id, brand = %car.brand, model = %car.model, "car created");
        Ok(car)
    }
}
