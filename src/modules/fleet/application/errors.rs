use thiserror::Error;

use crate::modules::fleet::adapters::outbound::fleet_store::StoreError;
use crate::modules::fleet::core::car::CarId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("car not found with id: {0}")]
    CarNotFound(CarId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
