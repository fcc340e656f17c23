//! CLI definition using clap

use clap::{Parser, Subcommand};

use fleet_tracker::client::api::DEFAULT_BASE_URL;
use fleet_tracker::modules::fleet::core::car::CarId;

#[derive(Parser)]
#[command(name = "fleet")]
#[command(version)]
#[command(about = "Command-line client for the car fleet API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the fleet API
    #[arg(long, global = true, env = "FLEET_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new car
    CreateCar {
        #[arg(long)]
        brand: String,

        #[arg(long)]
        model: String,

        #[arg(long)]
        year: i32,
    },

    /// Record a fuel purchase for a car
    AddFuel {
        #[arg(long = "carId", allow_negative_numbers = true)]
        car_id: CarId,

        /// Liters purchased
        #[arg(long, allow_negative_numbers = true)]
        liters: f64,

        /// Total price paid
        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        /// Odometer reading at the time of purchase
        #[arg(long, allow_negative_numbers = true)]
        odometer: i32,
    },

    /// Show fuel statistics for a car
    FuelStats {
        #[arg(long = "carId", allow_negative_numbers = true)]
        car_id: CarId,
    },

    /// List every car with its fuel history size
    ListCars,
}
