//! Metro planner API library
//!
//! This library provides the HTTP API for the metro route planner: station
//! listings, fastest-route queries with fares, and per-user journey history.

mod errors;
mod journeys;
mod route;
mod stations;
mod store;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::journeys::MemoryJourneyStore;
pub use crate::journeys::{Journey, JourneyStore};
pub use crate::store::{GraphStore, StoreError};

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Shared request context: the graph store plus the journey history seam.
///
/// Route computation is stateless (each request loads its own graph); the
/// journey store is the only shared mutable state.
#[derive(Clone)]
pub struct AppState {
    pub graphs: Arc<GraphStore>,
    pub journeys: Arc<dyn JourneyStore>,
}

impl AppState {
    pub fn new(graphs: GraphStore) -> Self {
        AppState {
            graphs: Arc::new(graphs),
            journeys: Arc::new(MemoryJourneyStore::default()),
        }
    }
}

/// Create the application router with all endpoints
pub fn create_app(graphs: GraphStore) -> Router {
    let state = AppState::new(graphs);
    Router::new()
        .route("/health", get(health_check))
        .route("/cities", get(stations::list_cities))
        .route("/stations", get(stations::list_stations))
        .route("/route", get(route::find_route))
        .route(
            "/journeys",
            post(journeys::record_journey).get(journeys::list_journeys),
        )
        .route("/journeys/stats", get(journeys::journey_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
