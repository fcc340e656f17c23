//! `fleet` - command-line client for the car fleet API.

mod args;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use args::{Cli, Commands};
use fleet_tracker::client::api::{AddFuelRequest, CreateCarRequest, FleetClient};
use fleet_tracker::client::render;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli).await;
    if let Err(e) = &result {
        eprintln!("{}", error_line(e));
    }
    std::process::exit(exit_code(&result));
}

/// One line for stderr, so calling scripts can log it as-is.
fn error_line(error: &anyhow::Error) -> String {
    let message = error.to_string();
    format!("Error: {}", message.lines().collect::<Vec<_>>().join(" "))
}

fn exit_code(result: &Result<()>) -> i32 {
    if result.is_ok() { 0 } else { 1 }
}

async fn run(cli: Cli) -> Result<()> {
    let client = FleetClient::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;

    let output = match cli.command {
        Commands::CreateCar { brand, model, year } => {
            let car = client
                .create_car(&CreateCarRequest { brand, model, year })
                .await?;
            render::created_car(&car)
        }
        Commands::AddFuel {
            car_id,
            liters,
            price,
            odometer,
        } => {
            client
                .add_fuel(
                    car_id,
                    &AddFuelRequest {
                        liters,
                        price,
                        odometer,
                    },
                )
                .await?;
            render::fuel_added()
        }
        Commands::FuelStats { car_id } => {
            let stats = client.fuel_stats(car_id).await?;
            render::fuel_stats(car_id, &stats)
        }
        Commands::ListCars => render::car_list(&client.list_cars().await?),
    };

    print!("{output}");
    Ok(())
}
