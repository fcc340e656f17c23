use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::fleet::application::errors::ApplicationError;
use crate::modules::fleet::core::car::CarId;
use crate::modules::fleet::use_cases::add_fuel_entry::command::AddFuelEntry;
use crate::shell::http::{INVALID_CAR_ID, application_error_response, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddFuelEntryBody {
    pub liters: f64,
    pub price: f64,
    pub odometer: i32,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<CarId>, PathRejection>,
    body: Result<Json<AddFuelEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Path(car_id)) = path else {
        return error_response(StatusCode::BAD_REQUEST, INVALID_CAR_ID);
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let command = AddFuelEntry {
        car_id,
        liters: body.liters,
        price: body.price,
        odometer: body.odometer,
    };

    match state.add_fuel_entry_handler.handle(command).await {
        Ok(()) => (StatusCode::OK, "Fuel entry added successfully").into_response(),
        Err(ApplicationError::CarNotFound(id)) => (
            StatusCode::NOT_FOUND,
            format!("Car not found with id: {id}"),
        )
            .into_response(),
        Err(e) => application_error_response(e),
    }
}
