// In memory fleet store.
//
// Responsibilities
// - Issue car ids from an atomic counter, starting at 1 and never reused.
// - Keep every car behind its own lock so appends to different cars only
//   share the map's read lock.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::modules::fleet::adapters::outbound::fleet_store::{FleetStore, StoreError};
use crate::modules::fleet::core::car::{Car, CarId};
use crate::modules::fleet::core::fuel_entry::FuelEntry;

pub struct InMemoryFleetStore {
    cars: RwLock<BTreeMap<CarId, Arc<Mutex<Car>>>>,
    next_id: AtomicI64,
    is_offline: bool,
}

impl Default for InMemoryFleetStore {
    fn default() -> Self {
        Self {
            cars: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            is_offline: false,
        }
    }
}

impl InMemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Fleet store offline".into()));
        }
        Ok(())
    }

    async fn car(&self, car_id: CarId) -> Option<Arc<Mutex<Car>>> {
        self.cars.read().await.get(&car_id).cloned()
    }
}

#[async_trait]
impl FleetStore for InMemoryFleetStore {
    async fn create_car(
        &self,
        brand: String,
        model: String,
        year: i32,
    ) -> Result<Car, StoreError> {
        self.ensure_online()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let car = Car::new(id, brand, model, year);
        self.cars
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(car.clone())));
        Ok(car)
    }

    async fn list_cars(&self) -> Result<Vec<Car>, StoreError> {
        self.ensure_online()?;

        let handles: Vec<Arc<Mutex<Car>>> = self.cars.read().await.values().cloned().collect();
        let mut cars = Vec::with_capacity(handles.len());
        for handle in handles {
            cars.push(handle.lock().await.clone());
        }
        Ok(cars)
    }

    async fn add_fuel_entry(&self, car_id: CarId, entry: FuelEntry) -> Result<bool, StoreError> {
        self.ensure_online()?;

        let Some(car) = self.car(car_id).await else {
            return Ok(false);
        };
        car.lock().await.add_fuel_entry(entry);
        Ok(true)
    }

    async fn fuel_entries(&self, car_id: CarId) -> Result<Option<Vec<FuelEntry>>, StoreError> {
        self.ensure_online()?;

        let Some(car) = self.car(car_id).await else {
            return Ok(None);
        };
        let entries = car.lock().await.fuel_entries.clone();
        Ok(Some(entries))
    }
}
