use crate::modules::fleet::core::car::CarId;
use crate::modules::fleet::core::fuel_entry::FuelEntry;

/// Values are taken as given: zero and negative readings are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddFuelEntry {
    pub car_id: CarId,
    pub liters: f64,
    pub price: f64,
    pub odometer: i32,
}

impl AddFuelEntry {
    pub fn entry(&self) -> FuelEntry {
        FuelEntry::new(self.liters, self.price, self.odometer)
    }
}
