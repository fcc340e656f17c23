use std::sync::Arc;

use crate::modules::fleet::adapters::outbound::fleet_store::FleetStore;
use crate::modules::fleet::adapters::outbound::fleet_store_in_memory::InMemoryFleetStore;
use crate::modules::fleet::use_cases::add_fuel_entry::handler::AddFuelEntryHandler;
use crate::modules::fleet::use_cases::create_car::handler::CreateCarHandler;
use crate::modules::fleet::use_cases::get_fuel_stats::handler::FuelStatsHandler;
use crate::modules::fleet::use_cases::list_cars::handler::ListCarsHandler;

/// Everything the HTTP layer needs, built once at startup around a single store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FleetStore>,
    pub create_car_handler: Arc<CreateCarHandler>,
    pub list_cars_handler: Arc<ListCarsHandler>,
    pub add_fuel_entry_handler: Arc<AddFuelEntryHandler>,
    pub fuel_stats_handler: Arc<FuelStatsHandler>,
}

impl AppState {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self {
            create_car_handler: Arc::new(CreateCarHandler::new(store.clone())),
            list_cars_handler: Arc::new(ListCarsHandler::new(store.clone())),
            add_fuel_entry_handler: Arc::new(AddFuelEntryHandler::new(store.clone())),
            fuel_stats_handler: Arc::new(FuelStatsHandler::new(store.clone())),
            store,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryFleetStore::new()))
    }
}
