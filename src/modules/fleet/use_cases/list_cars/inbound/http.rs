use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::http::application_error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_cars_handler.handle().await {
        Ok(cars) => Json(cars).into_response(),
        Err(e) => application_error_response(e),
    }
}
