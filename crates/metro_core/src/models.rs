use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Station name -> station, in the order the city file declares them.
///
/// Names are unique, case-sensitive keys. This is the shape the per-city
/// JSON resources deserialize into.
pub type CityGraph = IndexMap<String, Station>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Coordinates are presentation payload; routing never reads them.
    pub lat: f64,
    pub lng: f64,
    pub neighbors: Vec<Link>,
}

/// A directed edge owned by its source station. Physical links are authored
/// as two of these, one per direction; routing only ever follows declared
/// edges and does not assume symmetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub station: String,
    /// Travel time in minutes.
    pub time: u32,
    /// Corridor label, e.g. "Red" or "Blue".
    pub line: String,
}

/// One element of a computed path. `line` is the line of the edge used to
/// reach this station, so the origin carries `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub station: String,
    pub line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub path: Vec<Stop>,
    /// Sum of edge weights along the path, in minutes. 0 when the path is
    /// empty or a single station.
    pub total_time: u32,
}

impl Route {
    /// Number of edges traversed; the input to fare calculation.
    pub fn hop_count(&self) -> u32 {
        self.path.len().saturating_sub(1) as u32
    }
}
