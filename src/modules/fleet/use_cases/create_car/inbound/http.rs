use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::fleet::use_cases::create_car::command::CreateCar;
use crate::shell::http::{application_error_response, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateCarBody {
    pub brand: String,
    pub model: String,
    pub year: i32,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateCarBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let command = CreateCar {
        brand: body.brand,
        model: body.model,
        year: body.year,
    };

    match state.create_car_handler.handle(command).await {
        Ok(car) => (StatusCode::CREATED, Json(car)).into_response(),
        Err(e) => application_error_response(e),
    }
}
