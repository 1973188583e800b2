use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use metro_core::{Stop, fare};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::errors::{route_error_to_response, store_error_to_response};

#[derive(Deserialize)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
    pub city: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub path: Vec<Stop>,
    /// Total travel time in minutes; 0 when no route exists.
    pub total_time: u32,
    pub fare: u32,
}

/// Compute the fastest route between two stations, priced for the city
pub async fn find_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> impl IntoResponse {
    tracing::info!(
        "Finding route from {} to {} in {}",
        query.from,
        query.to,
        query.city
    );

    let network = match state.graphs.load(&query.city) {
        Ok(network) => network,
        Err(error) => return store_error_to_response(error).into_response(),
    };

    match network.find_route(&query.from, &query.to) {
        Ok(route) => {
            let fare = fare(&query.city, route.hop_count());
            (
                StatusCode::OK,
                Json(RouteResponse {
                    fare,
                    total_time: route.total_time,
                    path: route.path,
                }),
            )
                .into_response()
        }
        Err(error) => route_error_to_response(error).into_response(),
    }
}
