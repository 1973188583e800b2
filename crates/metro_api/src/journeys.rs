use std::collections::BTreeMap;
use std::sync::Mutex;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use metro_core::fare;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AppState;
use crate::errors::{route_error_to_response, store_error_to_response, unauthorized};

const USER_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub id: Uuid,
    pub user_id: String,
    pub city: String,
    pub from_station: String,
    pub to_station: String,
    /// Travel date as YYYY-MM-DD, supplied by the client.
    pub date: String,
    pub total_time: u32,
    pub fare: u32,
}

/// Persistence seam for journey history, keyed by user identity.
///
/// The server never inspects other users' journeys; a deployment would back
/// this with an external document store. `MemoryJourneyStore` is what ships.
pub trait JourneyStore: Send + Sync {
    fn record(&self, journey: Journey);
    fn for_user(&self, user_id: &str) -> Vec<Journey>;
}

#[derive(Default)]
pub struct MemoryJourneyStore {
    journeys: Mutex<Vec<Journey>>,
}

impl JourneyStore for MemoryJourneyStore {
    fn record(&self, journey: Journey) {
        self.journeys.lock().unwrap().push(journey);
    }

    fn for_user(&self, user_id: &str) -> Vec<Journey> {
        self.journeys
            .lock()
            .unwrap()
            .iter()
            .filter(|journey| journey.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordJourneyRequest {
    pub city: String,
    pub from_station: String,
    pub to_station: String,
    pub date: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResponse {
    pub journey: Journey,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub trips: u32,
    pub total_fare: u32,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStats {
    /// YYYY-MM -> trips and fare spent that month.
    pub monthly: BTreeMap<String, MonthlyStats>,
    /// YYYY-MM-DD -> trips that day.
    pub daily: BTreeMap<String, u32>,
    /// Station -> times it appeared as an endpoint.
    pub stations: BTreeMap<String, u32>,
}

/// Aggregate a user's journeys for the analytics endpoint.
fn stats_for(journeys: &[Journey]) -> JourneyStats {
    let mut monthly: BTreeMap<String, MonthlyStats> = BTreeMap::new();
    let mut daily: BTreeMap<String, u32> = BTreeMap::new();
    let mut stations: BTreeMap<String, u32> = BTreeMap::new();

    for journey in journeys {
        let month = journey.date.get(0..7).unwrap_or(&journey.date);
        let entry = monthly.entry(month.to_string()).or_default();
        entry.trips += 1;
        entry.total_fare += journey.fare;

        *daily.entry(journey.date.clone()).or_default() += 1;

        *stations.entry(journey.from_station.clone()).or_default() += 1;
        if journey.to_station != journey.from_station {
            *stations.entry(journey.to_station.clone()).or_default() += 1;
        }
    }

    JourneyStats {
        monthly,
        daily,
        stations,
    }
}

fn user_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Record a completed journey with its computed time and fare
pub async fn record_journey(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RecordJourneyRequest>,
) -> impl IntoResponse {
    let Some(user_id) = user_id(&headers) else {
        return unauthorized().into_response();
    };
    tracing::info!(
        "Recording journey for {}: {} -> {} in {}",
        user_id,
        payload.from_station,
        payload.to_station,
        payload.city
    );

    let network = match state.graphs.load(&payload.city) {
        Ok(network) => network,
        Err(error) => return store_error_to_response(error).into_response(),
    };
    let route = match network.find_route(&payload.from_station, &payload.to_station) {
        Ok(route) => route,
        Err(error) => return route_error_to_response(error).into_response(),
    };

    let journey = Journey {
        id: Uuid::new_v4(),
        user_id,
        fare: fare(&payload.city, route.hop_count()),
        total_time: route.total_time,
        city: payload.city,
        from_station: payload.from_station,
        to_station: payload.to_station,
        date: payload.date,
    };
    state.journeys.record(journey.clone());

    (StatusCode::CREATED, Json(JourneyResponse { journey })).into_response()
}

/// List the calling user's journey history
pub async fn list_journeys(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let Some(user_id) = user_id(&headers) else {
        return unauthorized().into_response();
    };
    tracing::info!("Listing journeys for {}", user_id);
    Json(state.journeys.for_user(&user_id)).into_response()
}

/// Aggregate the calling user's journeys for charts
pub async fn journey_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let Some(user_id) = user_id(&headers) else {
        return unauthorized().into_response();
    };
    tracing::info!("Computing journey stats for {}", user_id);
    Json(stats_for(&state.journeys.for_user(&user_id))).into_response()
}
