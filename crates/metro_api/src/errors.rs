use axum::{Json, http::StatusCode};
use metro_core::RouteError;
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}

pub fn store_error_to_response(error: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match &error {
        StoreError::UnsupportedCity { city } => (
            StatusCode::NOT_FOUND,
            format!("City {:?} is not supported", city),
        ),
        StoreError::Read { city, .. } | StoreError::Parse { city, .. } => {
            tracing::error!("Failed to load metro data for {}: {}", city, error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Metro data is unavailable".to_string(),
            )
        }
    };

    (status, Json(ErrorResponse { error: message }))
}

pub fn route_error_to_response(error: RouteError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match error {
        RouteError::StationNotFound { station } => (
            StatusCode::BAD_REQUEST,
            format!("Invalid station {:?}", station),
        ),
    };

    (status, Json(ErrorResponse { error: message }))
}

pub fn unauthorized() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "Missing x-user-id header".to_string(),
        }),
    )
}
