use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::modules::fleet::core::car::{Car, CarId};
use crate::modules::fleet::core::fuel_stats::FuelStats;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Car not found with ID: {0}")]
    CarNotFound(CarId),

    #[error("{action} failed. Status: {status}")]
    UnexpectedStatus {
        action: &'static str,
        status: StatusCode,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Serialize)]
pub struct CreateCarRequest {
    pub brand: String,
    pub model: String,
    pub year: i32,
}

#[derive(Debug, Serialize)]
pub struct AddFuelRequest {
    pub liters: f64,
    pub price: f64,
    pub odometer: i32,
}

pub struct FleetClient {
    client: Client,
    base_url: String,
}

impl FleetClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ClientError::Transport {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn create_car(&self, request: &CreateCarRequest) -> Result<Car, ClientError> {
        let url = format!("{}/api/cars", self.base_url);
        tracing::debug!(%url, "creating car");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport(&url))?;

        if response.status() != StatusCode::CREATED {
            return Err(ClientError::UnexpectedStatus {
                action: "Create car",
                status: response.status(),
            });
        }
        response.json().await.map_err(transport(&url))
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>, ClientError> {
        let url = format!("{}/api/cars", self.base_url);
        let response = self.client.get(&url).send().await.map_err(transport(&url))?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                action: "List cars",
                status: response.status(),
            });
        }
        response.json().await.map_err(transport(&url))
    }

    pub async fn add_fuel(&self, car_id: CarId, request: &AddFuelRequest) -> Result<(), ClientError> {
        let url = format!("{}/api/cars/{car_id}/fuel", self.base_url);
        tracing::debug!(%url, "adding fuel entry");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport(&url))?;

        match response.status() {
            StatusCode::OK => Ok(()),
            StatusCode::NOT_FOUND => Err(ClientError::CarNotFound(car_id)),
            status => Err(ClientError::UnexpectedStatus {
                action: "Add fuel entry",
                status,
            }),
        }
    }

    pub async fn fuel_stats(&self, car_id: CarId) -> Result<FuelStats, ClientError> {
        let url = format!("{}/api/cars/{car_id}/fuel/stats", self.base_url);
        let response = self.client.get(&url).send().await.map_err(transport(&url))?;

        match response.status() {
            StatusCode::OK => response.json().await.map_err(transport(&url)),
            StatusCode::NOT_FOUND => Err(ClientError::CarNotFound(car_id)),
            status => Err(ClientError::UnexpectedStatus {
                action: "Get stats",
                status,
            }),
        }
    }
}

fn transport(url: &str) -> impl FnOnce(reqwest::Error) -> ClientError + '_ {
    move |source| ClientError::Transport {
        url: url.to_string(),
        source,
    }
}
