use serde::{Deserialize, Serialize};

use crate::modules::fleet::core::fuel_entry::FuelEntry;

pub type CarId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub fuel_entries: Vec<FuelEntry>,
}

impl Car {
    pub fn new(id: CarId, brand: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            brand: brand.into(),
            model: model.into(),
            year,
            fuel_entries: Vec::new(),
        }
    }

    /// Entries are append-only and keep insertion order.
    pub fn add_fuel_entry(&mut self, entry: FuelEntry) {
        self.fuel_entries.push(entry);
    }
}
