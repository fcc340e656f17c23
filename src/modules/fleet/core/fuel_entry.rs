use serde::{Deserialize, Serialize};

/// A single fuel purchase. `price` is the total paid, not the unit price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelEntry {
    pub liters: f64,
    pub price: f64,
    pub odometer: i32,
}

impl FuelEntry {
    pub fn new(liters: f64, price: f64, odometer: i32) -> Self {
        Self {
            liters,
            price,
            odometer,
        }
    }
}
