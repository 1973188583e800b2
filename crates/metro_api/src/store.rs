use std::fs;
use std::path::PathBuf;

use metro_core::{CityGraph, Network};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("City {city:?} is not supported")]
    UnsupportedCity { city: String },
    #[error("Could not read metro data for {city:?}")]
    Read {
        city: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Metro data for {city:?} is malformed")]
    Parse {
        city: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolves per-city station graphs from static JSON resources.
///
/// Each city is a `<city>-metro.json` file in the data directory. Files are
/// re-read on every call: graphs are small, nothing mutates them, and a
/// redeploy of the data directory is the only invalidation that exists. A
/// read-mostly cache could wrap this without changing any caller.
pub struct GraphStore {
    data_dir: PathBuf,
}

impl GraphStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        GraphStore {
            data_dir: data_dir.into(),
        }
    }

    fn city_path(&self, city: &str) -> PathBuf {
        self.data_dir.join(format!("{}-metro.json", city.to_lowercase()))
    }

    /// Load a city's network, fresh from disk.
    pub fn load(&self, city: &str) -> Result<Network, StoreError> {
        let path = self.city_path(city);
        if !path.is_file() {
            return Err(StoreError::UnsupportedCity {
                city: city.to_string(),
            });
        }
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            city: city.to_string(),
            source,
        })?;
        let graph: CityGraph = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            city: city.to_string(),
            source,
        })?;
        Ok(Network::new(graph))
    }

    /// Cities with a backing data file, sorted for stable output.
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = fs::read_dir(&self.data_dir)
            .into_iter()
            .flatten()
            .flatten()
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter_map(|name| name.strip_suffix("-metro.json").map(str::to_owned))
            .collect();
        cities.sort();
        cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn testdata() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
    }

    #[test]
    fn test_load_preserves_station_order() {
        let store = GraphStore::new(testdata());
        let network = store.load("hyderabad").unwrap();

        let names: Vec<&str> = network.station_names().collect();
        assert_eq!(
            names,
            ["Miyapur", "KPHB Colony", "Ameerpet", "Begumpet", "LB Nagar", "Raidurg"]
        );
    }

    #[test]
    fn test_city_match_is_case_insensitive() {
        let store = GraphStore::new(testdata());
        assert!(store.load("Hyderabad").is_ok());
        assert!(store.load("CHENNAI").is_ok());
    }

    #[test]
    fn test_unsupported_city() {
        let store = GraphStore::new(testdata());
        match store.load("atlantis") {
            Err(StoreError::UnsupportedCity { city }) => assert_eq!(city, "atlantis"),
            other => panic!("Expected UnsupportedCity, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_data_file() {
        let store = GraphStore::new(testdata().join("corrupt"));
        match store.load("linden") {
            Err(StoreError::Parse { city, .. }) => assert_eq!(city, "linden"),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_data_file() {
        // The ashford fixture is not valid UTF-8, so the read itself fails
        // before parsing starts.
        let store = GraphStore::new(testdata().join("corrupt"));
        match store.load("ashford") {
            Err(StoreError::Read { city, .. }) => assert_eq!(city, "ashford"),
            other => panic!("Expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn test_cities_listing() {
        let store = GraphStore::new(testdata());
        assert_eq!(store.cities(), ["chennai", "hyderabad"]);
    }

    #[test]
    fn test_cities_listing_missing_dir_is_empty() {
        let store = GraphStore::new(testdata().join("no-such-dir"));
        assert!(store.cities().is_empty());
    }
}
