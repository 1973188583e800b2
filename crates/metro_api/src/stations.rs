use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::errors::store_error_to_response;

#[derive(Deserialize)]
pub struct CityQuery {
    pub city: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInfo {
    pub city: String,
    pub first_train: Option<String>,
    pub last_train: Option<String>,
    pub notes: Option<String>,
}

// Published service windows per network. Cities without an entry are still
// served; they just carry no timings.
const SERVICE_TIMINGS: &[(&str, &str, &str, &str)] = &[
    (
        "hyderabad",
        "06:00 AM",
        "11:45 PM",
        "On Sundays, service starts around 07:00 AM.",
    ),
    (
        "chennai",
        "05:47 AM",
        "10:07 PM",
        "Other corridors may vary slightly.",
    ),
    (
        "bengaluru",
        "05:00 AM",
        "11:00 PM",
        "Sundays usually start at 06:00 AM.",
    ),
    (
        "mumbai",
        "05:30 AM",
        "11:50 PM",
        "Last train varies by direction (Versova: 11:25 PM).",
    ),
    (
        "jaipur",
        "06:25 AM",
        "10:22 PM",
        "Service may extend slightly on weekends.",
    ),
];

/// List a city's stations in the order its network file declares them
pub async fn list_stations(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> impl IntoResponse {
    tracing::info!("Listing stations for {}", query.city);
    match state.graphs.load(&query.city) {
        Ok(network) => {
            let names: Vec<String> = network.station_names().map(str::to_owned).collect();
            Json(names).into_response()
        }
        Err(error) => store_error_to_response(error).into_response(),
    }
}

/// List the cities with a backing network, with their service timings
pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<CityInfo>> {
    tracing::info!("Listing supported cities");
    let cities = state
        .graphs
        .cities()
        .into_iter()
        .map(|city| {
            let timings = SERVICE_TIMINGS.iter().find(|(name, ..)| *name == city);
            CityInfo {
                first_train: timings.map(|(_, first, ..)| first.to_string()),
                last_train: timings.map(|(_, _, last, _)| last.to_string()),
                notes: timings.map(|(.., notes)| notes.to_string()),
                city,
            }
        })
        .collect();
    Json(cities)
}
