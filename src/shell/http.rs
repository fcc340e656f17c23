use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;

use crate::modules::fleet::application::errors::ApplicationError;
use crate::modules::fleet::use_cases::add_fuel_entry::inbound::http as add_fuel_http;
use crate::modules::fleet::use_cases::create_car::inbound::http as create_car_http;
use crate::modules::fleet::use_cases::get_fuel_stats::inbound::http as fuel_stats_http;
use crate::modules::fleet::use_cases::list_cars::inbound::http as list_cars_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/cars",
            get(list_cars_http::handle).post(create_car_http::handle),
        )
        .route("/api/cars/{id}/fuel", post(add_fuel_http::handle))
        .route("/api/cars/{id}/fuel/stats", get(fuel_stats_http::handle))
        .route("/servlet/fuel-stats", get(fuel_stats_http::handle_legacy))
        .with_state(state)
}

/// 400 message for a car id that is not an integer.
pub const INVALID_CAR_ID: &str = "Invalid carId format";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn application_error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::CarNotFound(car_id) => error_response(
            StatusCode::NOT_FOUND,
            format!("Car not found with id: {car_id}"),
        ),
        ApplicationError::Store(e) => {
            tracing::error!(error = %e, "fleet store failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod router_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rstest::rstest;
    use tower::ServiceExt;

    use super::router;
    use crate::tests::fixtures::state::make_test_state;

    #[rstest]
    #[case::list_cars("GET", "/api/cars", StatusCode::OK)]
    #[case::unknown_car_stats("GET", "/api/cars/1/fuel/stats", StatusCode::NOT_FOUND)]
    #[case::legacy_stats_without_car_id("GET", "/servlet/fuel-stats", StatusCode::BAD_REQUEST)]
    #[case::negative_car_id_stats("GET", "/api/cars/-1/fuel/stats", StatusCode::NOT_FOUND)]
    #[case::legacy_negative_car_id("GET", "/servlet/fuel-stats?carId=-1", StatusCode::NOT_FOUND)]
    #[case::legacy_repeated_car_id(
        "GET",
        "/servlet/fuel-stats?carId=1&carId=2",
        StatusCode::NOT_FOUND
    )]
    #[case::unknown_route("GET", "/api/trucks", StatusCode::NOT_FOUND)]
    #[case::wrong_method("DELETE", "/api/cars", StatusCode::METHOD_NOT_ALLOWED)]
    #[tokio::test]
    async fn it_should_route_requests(
        #[case] method: &str,
        #[case] uri: &str,
        #[case] expected: StatusCode,
    ) {
        let response = router(make_test_state())
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), expected);
    }
}
