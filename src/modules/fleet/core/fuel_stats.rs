use serde::{Deserialize, Serialize};

use crate::modules::fleet::core::fuel_entry::FuelEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStats {
    pub total_fuel: f64,
    pub total_cost: f64,
    /// Liters per 100 odometer units.
    pub average_consumption: f64,
}

impl FuelStats {
    /// Aggregates a car's fuel history.
    ///
    /// Consumption is total fuel over the span between the lowest and the
    /// highest odometer reading, so the fill-up that opens the span is
    /// counted too. Fewer than two entries, or a span that is not positive,
    /// yields a consumption of zero.
    pub fn from_entries(entries: &[FuelEntry]) -> Self {
        if entries.is_empty() {
            return Self::default();
        }

        let total_fuel: f64 = entries.iter().map(|e| e.liters).sum();
        let total_cost: f64 = entries.iter().map(|e| e.price).sum();

        let mut average_consumption = 0.0;
        if entries.len() >= 2 {
            // Sort a copy; the caller's history keeps its insertion order.
            let mut by_odometer = entries.to_vec();
            by_odometer.sort_by_key(|e| e.odometer);

            let first = by_odometer[0].odometer;
            let last = by_odometer[by_odometer.len() - 1].odometer;
            let distance = i64::from(last) - i64::from(first);

            if distance > 0 {
                average_consumption = (total_fuel / distance as f64) * 100.0;
            }
        }

        Self {
            total_fuel,
            total_cost,
            average_consumption,
        }
    }
}
