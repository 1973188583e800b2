use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::models::{CityGraph, Route, Stop};

#[derive(Clone, Eq, PartialEq)]
struct State<'a> {
    cost: u32,
    station: &'a str,
}

// The priority queue depends on `Ord`. Flip the ordering on cost so the
// queue becomes a min-heap; break ties on the station name to keep
// `PartialEq` and `Ord` consistent.
impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.station.cmp(other.station))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest path by cumulative travel time.
///
/// `start` and `end` must be keys of `graph`; the caller validates them.
/// An unreachable `end` yields an empty path with a total of 0, never an
/// unbounded time.
pub(crate) fn shortest_path(graph: &CityGraph, start: &str, end: &str) -> Route {
    let mut dist: HashMap<&str, u32> = HashMap::new();
    // station -> (predecessor, line of the edge used to arrive)
    let mut prev: HashMap<&str, (&str, &str)> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    dist.insert(start, 0);
    frontier.push(State {
        cost: 0,
        station: start,
    });

    while let Some(State { cost, station }) = frontier.pop() {
        if !visited.insert(station) {
            continue;
        }
        let Some(current) = graph.get(station) else {
            continue;
        };
        for link in &current.neighbors {
            // Edges pointing outside the graph are ignored.
            if !graph.contains_key(&link.station) {
                continue;
            }
            let alt = cost + link.time;
            if alt < dist.get(link.station.as_str()).copied().unwrap_or(u32::MAX) {
                dist.insert(&link.station, alt);
                prev.insert(&link.station, (station, &link.line));
                frontier.push(State {
                    cost: alt,
                    station: &link.station,
                });
            }
        }
    }

    // Walk predecessors back from the destination, recording for each
    // station the line it was reached on.
    let mut stops = Vec::new();
    let mut current = end;
    while let Some(&(predecessor, line)) = prev.get(current) {
        stops.push(Stop {
            station: current.to_string(),
            line: Some(line.to_string()),
        });
        current = predecessor;
    }

    if current != start {
        return Route {
            path: Vec::new(),
            total_time: 0,
        };
    }

    stops.push(Stop {
        station: start.to_string(),
        line: None,
    });
    stops.reverse();

    Route {
        total_time: dist.get(end).copied().unwrap_or(0),
        path: stops,
    }
}
