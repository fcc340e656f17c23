use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::fleet::core::car::CarId;
use crate::shell::http::{INVALID_CAR_ID, application_error_response, error_response};
use crate::shell::state::AppState;

/// `GET /api/cars/{id}/fuel/stats`
pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<CarId>, PathRejection>,
) -> impl IntoResponse {
    let Ok(Path(car_id)) = path else {
        return error_response(StatusCode::BAD_REQUEST, INVALID_CAR_ID);
    };
    respond(&state, car_id).await
}

/// `GET /servlet/fuel-stats?carId={id}`, kept for older clients.
///
/// When `carId` is repeated the first value is used.
pub async fn handle_legacy(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    let Ok(Query(params)) = query else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid query string");
    };
    let raw = params
        .into_iter()
        .find_map(|(key, value)| (key == "carId").then_some(value));
    let Some(raw) = raw.filter(|v| !v.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "carId parameter is required");
    };
    let Ok(car_id) = raw.parse::<CarId>() else {
        return error_response(StatusCode::BAD_REQUEST, INVALID_CAR_ID);
    };
    respond(&state, car_id).await
}

async fn respond(state: &AppState, car_id: CarId) -> Response {
    match state.fuel_stats_handler.handle(car_id).await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => application_error_response(e),
    }
}
