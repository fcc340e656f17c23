use std::sync::Arc;

use crate::modules::fleet::adapters::outbound::fleet_store::FleetStore;
use crate::modules::fleet::application::errors::ApplicationError;
use crate::modules::fleet::use_cases::add_fuel_entry::command::AddFuelEntry;

pub struct AddFuelEntryHandler {
    store: Arc<dyn FleetStore>,
}

impl AddFuelEntryHandler {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AddFuelEntry) -> Result<(), ApplicationError> {
        let added = self
            .store
            .add_fuel_entry(command.car_id, command.entry())
            .await?;
        if !added {
            tracing::warn!(car_id = command.car_id, "fuel entry rejected, car not found");
            return Err(ApplicationError::CarNotFound(command.car_id));
        }
        tracing::info!(
            car_id = command.car_id,
            liters = command.liters,
            price = command.price,
            odometer = command.odometer,
            "fuel entry added"
        );
        Ok(())
    }
}
