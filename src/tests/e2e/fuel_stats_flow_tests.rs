use std::time::Duration;

use crate::client::api::{AddFuelRequest, ClientError, CreateCarRequest, FleetClient};
use crate::shell::http::router;
use crate::shell::state::AppState;

async fn spawn_server() -> FleetClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(AppState::in_memory()))
            .await
            .unwrap();
    });
    FleetClient::new(&format!("http://{address}"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn records_fuel_and_reports_stats_over_http() {
    let client = spawn_server().await;

    let car = client
        .create_car(&CreateCarRequest {
            brand: "Toyota".into(),
            model: "Corolla".into(),
            year: 2018,
        })
        .await
        .unwrap();
    assert_eq!(car.id, 1);
    assert!(car.fuel_entries.is_empty());

    for (liters, price, odometer) in [(40.0, 50.0, 1000), (35.0, 45.0, 1500)] {
        client
            .add_fuel(
                car.id,
                &AddFuelRequest {
                    liters,
                    price,
                    odometer,
                },
            )
            .await
            .unwrap();
    }

    let stats = client.fuel_stats(car.id).await.unwrap();
    assert!((stats.total_fuel - 75.0).abs() < 1e-9);
    assert!((stats.total_cost - 95.0).abs() < 1e-9);
    assert!((stats.average_consumption - 15.0).abs() < 1e-9);

    let cars = client.list_cars().await.unwrap();
    assert_eq!(cars.len(), 1);
    let odometers: Vec<i32> = cars[0].fuel_entries.iter().map(|e| e.odometer).collect();
    assert_eq!(odometers, vec![1000, 1500]);
}

#[tokio::test]
async fn lists_a_freshly_created_car() {
    let client = spawn_server().await;

    let car = client
        .create_car(&CreateCarRequest {
            brand: "Honda".into(),
            model: "Civic".into(),
            year: 2020,
        })
        .await
        .unwrap();

    assert_eq!(client.list_cars().await.unwrap(), vec![car]);
}

#[tokio::test]
async fn reports_unknown_cars_as_not_found() {
    let client = spawn_server().await;

    let stats = client.fuel_stats(9).await;
    assert!(matches!(stats, Err(ClientError::CarNotFound(9))));

    let added = client
        .add_fuel(
            9,
            &AddFuelRequest {
                liters: 40.0,
                price: 52.5,
                odometer: 45000,
            },
        )
        .await;
    assert!(matches!(added, Err(ClientError::CarNotFound(9))));
    assert!(client.list_cars().await.unwrap().is_empty());
}

#[tokio::test]
async fn reports_an_unreachable_server_as_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = FleetClient::new(&format!("http://{address}"), Duration::from_secs(1)).unwrap();
    let result = client.fuel_stats(1).await;
    assert!(matches!(result, Err(ClientError::Transport { .. })));
}
