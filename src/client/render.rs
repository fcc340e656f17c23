use std::fmt::Write;

use crate::modules::fleet::core::car::{Car, CarId};
use crate::modules::fleet::core::fuel_stats::FuelStats;

pub fn created_car(car: &Car) -> String {
    format!(
        "Car created successfully!\nID: {}\nBrand: {}\nModel: {}\nYear: {}\n",
        car.id, car.brand, car.model, car.year
    )
}

pub fn fuel_added() -> String {
    "Fuel entry added successfully!\n".to_string()
}

pub fn fuel_stats(car_id: CarId, stats: &FuelStats) -> String {
    format!(
        "\nFuel Statistics for Car #{car_id}\n\
         -------------------------------\n\
         Total fuel: {:.1} L\n\
         Total cost: {:.2}\n\
         Average consumption: {:.1} L/100km\n\n",
        stats.total_fuel, stats.total_cost, stats.average_consumption
    )
}

pub fn car_list(cars: &[Car]) -> String {
    if cars.is_empty() {
        return "No cars registered.\n".to_string();
    }

    let mut out = String::new();
    for car in cars {
        let _ = writeln!(
            out,
            "#{} {} {} ({}) - {} fuel entries",
            car.id,
            car.brand,
            car.model,
            car.year,
            car.fuel_entries.len()
        );
    }
    out
}
