mod fares;
mod models;
mod router;

pub use crate::fares::fare;
pub use crate::models::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Station {station:?} is not part of this network")]
    StationNotFound { station: String },
}

/// A city's station graph, ready for route queries.
///
/// Immutable once built; every query gets its own scratch state, so a
/// `Network` can be shared freely between concurrent readers.
#[derive(Debug, Clone)]
pub struct Network {
    stations: CityGraph,
}

impl Network {
    pub fn new(stations: CityGraph) -> Self {
        Network { stations }
    }

    /// Station names in the order the city file declares them.
    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.stations.keys().map(String::as_str)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Compute the fastest path between two stations.
    ///
    /// Both endpoints must exist in the network; unknown names are rejected
    /// before the search runs. A valid pair with no connecting path is not
    /// an error: it comes back as an empty path with a total of 0.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Route, RouteError> {
        tracing::info!("Computing route from {} to {}", from, to);
        for station in [from, to] {
            if !self.stations.contains_key(station) {
                return Err(RouteError::StationNotFound {
                    station: station.to_string(),
                });
            }
        }
        Ok(router::shortest_path(&self.stations, from, to))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Build a graph from directed (source, target, minutes, line) edges.
    /// Every named station becomes a node even if it has no outgoing edges.
    fn graph(stations: &[&str], edges: &[(&str, &str, u32, &str)]) -> CityGraph {
        let mut out = CityGraph::new();
        for station in stations {
            out.insert(
                station.to_string(),
                Station {
                    lat: 0.0,
                    lng: 0.0,
                    neighbors: Vec::new(),
                },
            );
        }
        for (source, target, time, line) in edges {
            out[*source].neighbors.push(Link {
                station: target.to_string(),
                time: *time,
                line: line.to_string(),
            });
        }
        out
    }

    /// Both directions of a physical link, the way city files author them.
    fn both_ways<'a>(
        edges: &[(&'a str, &'a str, u32, &'a str)],
    ) -> Vec<(&'a str, &'a str, u32, &'a str)> {
        edges
            .iter()
            .flat_map(|&(a, b, time, line)| [(a, b, time, line), (b, a, time, line)])
            .collect()
    }

    #[test]
    fn test_two_station_route() {
        let network = Network::new(graph(
            &["A", "B"],
            &both_ways(&[("A", "B", 5, "Red")]),
        ));

        let route = network.find_route("A", "B").unwrap();
        assert_eq!(
            route.path,
            vec![
                Stop {
                    station: "A".into(),
                    line: None,
                },
                Stop {
                    station: "B".into(),
                    line: Some("Red".into()),
                },
            ]
        );
        assert_eq!(route.total_time, 5);
        assert_eq!(route.hop_count(), 1);
    }

    #[test]
    fn test_same_station() {
        let network = Network::new(graph(
            &["A", "B"],
            &both_ways(&[("A", "B", 5, "Red")]),
        ));

        let route = network.find_route("A", "A").unwrap();
        assert_eq!(
            route.path,
            vec![Stop {
                station: "A".into(),
                line: None,
            }]
        );
        assert_eq!(route.total_time, 0);
        assert_eq!(route.hop_count(), 0);
    }

    #[test]
    fn test_disconnected_stations() {
        let network = Network::new(graph(&["A", "B"], &[]));

        let route = network.find_route("A", "B").unwrap();
        assert!(route.path.is_empty());
        assert_eq!(route.total_time, 0);
    }

    #[test]
    fn test_unknown_station_rejected() {
        let network = Network::new(graph(
            &["A", "B"],
            &both_ways(&[("A", "B", 5, "Red")]),
        ));

        let result = network.find_route("A", "Z");
        match result {
            Err(RouteError::StationNotFound { station }) => assert_eq!(station, "Z"),
            other => panic!("Expected StationNotFound, got {:?}", other),
        }

        let result = network.find_route("Z", "A");
        match result {
            Err(RouteError::StationNotFound { station }) => assert_eq!(station, "Z"),
            other => panic!("Expected StationNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_total_time_sums_edge_weights() {
        let network = Network::new(graph(
            &["A", "B", "C", "D"],
            &both_ways(&[
                ("A", "B", 3, "Red"),
                ("B", "C", 4, "Red"),
                ("C", "D", 2, "Red"),
            ]),
        ));

        let route = network.find_route("A", "D").unwrap();
        assert_eq!(route.total_time, 9);
        assert_eq!(route.path.first().unwrap().station, "A");
        assert_eq!(route.path.last().unwrap().station, "D");
        assert_eq!(route.hop_count(), 3);
    }

    #[test]
    fn test_transfer_records_arriving_line() {
        // Red from A to the interchange, Blue onwards.
        let network = Network::new(graph(
            &["A", "X", "B"],
            &both_ways(&[("A", "X", 2, "Red"), ("X", "B", 3, "Blue")]),
        ));

        let route = network.find_route("A", "B").unwrap();
        let lines: Vec<Option<&str>> = route.path.iter().map(|s| s.line.as_deref()).collect();
        assert_eq!(lines, vec![None, Some("Red"), Some("Blue")]);
    }

    #[test]
    fn test_prefers_faster_path_over_fewer_hops() {
        let network = Network::new(graph(
            &["A", "B", "C"],
            &both_ways(&[
                ("A", "C", 10, "Red"),
                ("A", "B", 3, "Blue"),
                ("B", "C", 4, "Blue"),
            ]),
        ));

        let route = network.find_route("A", "C").unwrap();
        assert_eq!(route.total_time, 7);
        assert_eq!(route.path.len(), 3);
        assert_eq!(route.path[1].station, "B");
    }

    #[test]
    fn test_equal_cost_paths_report_the_minimum() {
        // Two distinct paths A->D, both costing 6. Either may be returned;
        // only the cost and the endpoints are pinned down.
        let network = Network::new(graph(
            &["A", "B", "C", "D"],
            &both_ways(&[
                ("A", "B", 3, "Red"),
                ("B", "D", 3, "Red"),
                ("A", "C", 2, "Blue"),
                ("C", "D", 4, "Blue"),
            ]),
        ));

        let route = network.find_route("A", "D").unwrap();
        assert_eq!(route.total_time, 6);
        assert_eq!(route.path.first().unwrap().station, "A");
        assert_eq!(route.path.last().unwrap().station, "D");
    }

    #[test]
    fn test_declared_edges_only() {
        // One-way edge: B has no way back to A.
        let network = Network::new(graph(&["A", "B"], &[("A", "B", 5, "Red")]));

        let forward = network.find_route("A", "B").unwrap();
        assert_eq!(forward.total_time, 5);

        let back = network.find_route("B", "A").unwrap();
        assert!(back.path.is_empty());
        assert_eq!(back.total_time, 0);
    }

    #[test]
    fn test_triangle_consistency() {
        let network = Network::new(graph(
            &["A", "B", "C"],
            &both_ways(&[
                ("A", "B", 4, "Red"),
                ("B", "C", 5, "Red"),
                ("A", "C", 11, "Blue"),
            ]),
        ));

        let ab = network.find_route("A", "B").unwrap().total_time;
        let bc = network.find_route("B", "C").unwrap().total_time;
        let ac = network.find_route("A", "C").unwrap().total_time;
        assert!(ac <= ab + bc);
    }

    #[test]
    fn test_edge_to_unknown_station_is_ignored() {
        let mut stations = graph(&["A", "B"], &both_ways(&[("A", "B", 5, "Red")]));
        stations["A"].neighbors.push(Link {
            station: "Ghost".into(),
            time: 1,
            line: "Red".into(),
        });
        let network = Network::new(stations);

        let route = network.find_route("A", "B").unwrap();
        assert_eq!(route.total_time, 5);
        assert_eq!(route.path.len(), 2);
    }

    #[test]
    fn test_station_names_keep_declaration_order() {
        let network = Network::new(graph(&["Miyapur", "Ameerpet", "LB Nagar"], &[]));
        let names: Vec<&str> = network.station_names().collect();
        assert_eq!(names, ["Miyapur", "Ameerpet", "LB Nagar"]);
        assert_eq!(network.station_count(), 3);
    }
}
