//! The query engine itself.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use super::config::QueryConfig;
use super::error::QueryError;
use super::ranked::RankedStation;
use crate::dataset::{Datasets, Station, Town};

/// Result of a search, shaped for display.
///
/// A town that cannot be resolved is reported here rather than as an
/// error: `error` carries the message, `stations` is empty, and
/// `selected_town` echoes the request verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub error: Option<String>,
    pub selected_town: String,
    pub stations: Vec<RankedStation>,
}

/// Nearest-stations lookup over immutable in-memory datasets.
#[derive(Debug)]
pub struct NearbyStations {
    towns: Vec<Town>,
    stations: Vec<Station>,
    /// Lowercased town name → index of the first town with that name.
    town_index: HashMap<String, usize>,
    /// All town names in ascending order.
    sorted_names: Vec<String>,
    config: QueryConfig,
}

impl NearbyStations {
    /// Build the engine, indexing towns by lowercased name.
    pub fn new(datasets: Datasets, config: QueryConfig) -> Self {
        let Datasets { towns, stations } = datasets;

        let mut town_index = HashMap::with_capacity(towns.len());
        for (i, town) in towns.iter().enumerate() {
            town_index.entry(town.name.to_lowercase()).or_insert(i);
        }

        let mut sorted_names: Vec<String> = towns.iter().map(|t| t.name.clone()).collect();
        sorted_names.sort();

        Self {
            towns,
            stations,
            town_index,
            sorted_names,
            config,
        }
    }

    /// All town names, sorted ascending.
    pub fn town_names(&self) -> &[String] {
        &self.sorted_names
    }

    pub fn town_count(&self) -> usize {
        self.towns.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Find a town by name, ignoring case.
    pub fn resolve_town(&self, name: &str) -> Option<&Town> {
        self.town_index
            .get(&name.to_lowercase())
            .map(|&i| &self.towns[i])
    }

    /// Rank stations by distance from the named town.
    ///
    /// Stations without usable coordinates are skipped. The result is
    /// sorted ascending by distance, ties keeping dataset order, and holds
    /// at most `max_results` entries.
    pub fn query(&self, town_name: &str) -> Result<Vec<RankedStation>, QueryError> {
        let town = self
            .resolve_town(town_name)
            .ok_or_else(|| QueryError::TownNotFound {
                requested: town_name.to_string(),
            })?;
        let origin = town.coordinate();

        let mut distances: Vec<(usize, f64)> = self
            .stations
            .iter()
            .enumerate()
            .filter_map(|(i, station)| {
                let position = station.coordinate()?;
                Some((i, origin.distance_km(&position)))
            })
            .collect();
        let located = distances.len();

        // Stable, so equal distances keep dataset order
        distances.sort_by(|a, b| a.1.total_cmp(&b.1));
        distances.truncate(self.config.max_results);

        debug!(
            town = %town.name,
            located,
            returned = distances.len(),
            "ranked stations"
        );

        Ok(distances
            .into_iter()
            .map(|(i, km)| RankedStation::from_station(&self.stations[i], km))
            .collect())
    }

    /// Run a query and fold a missing town into the outcome.
    pub fn search(&self, town_name: &str) -> SearchOutcome {
        match self.query(town_name) {
            Ok(stations) => SearchOutcome {
                error: None,
                selected_town: town_name.to_string(),
                stations,
            },
            Err(err) => {
                let QueryError::TownNotFound { requested } = &err;
                info!(requested = %requested, "town not found");
                SearchOutcome {
                    error: Some(err.to_string()),
                    selected_town: requested.clone(),
                    stations: Vec::new(),
                }
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::nearby::DEFAULT_MAX_RESULTS;
    use proptest::prelude::*;

    /// A station whose coordinates may each be missing.
    fn arb_station() -> impl Strategy<Value = Station> {
        (
            proptest::option::weighted(0.9, 41.0..43.0f64),
            proptest::option::weighted(0.9, -73.5..-69.9f64),
        )
            .prop_map(|(latitude, longitude)| Station {
                latitude,
                longitude,
                ..Station::default()
            })
    }

    fn arb_stations() -> impl Strategy<Value = Vec<Station>> {
        prop::collection::vec(arb_station(), 1..150).prop_map(|mut stations| {
            // Name each station by its position so results can be traced back
            for (i, s) in stations.iter_mut().enumerate() {
                s.name = Some(i.to_string());
            }
            stations
        })
    }

    fn build(stations: Vec<Station>) -> NearbyStations {
        NearbyStations::new(
            Datasets {
                towns: vec![Town::new("Boston", 42.3601, -71.0589)],
                stations,
            },
            QueryConfig::default(),
        )
    }

    proptest! {
        #[test]
        fn results_are_sorted_and_capped(stations in arb_stations()) {
            let located = stations.iter().filter(|s| s.coordinate().is_some()).count();
            let engine = build(stations);
            let results = engine.query("BOSTON").unwrap();

            prop_assert_eq!(results.len(), located.min(DEFAULT_MAX_RESULTS));
            prop_assert!(results.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
        }

        #[test]
        fn unlocated_stations_never_returned(stations in arb_stations()) {
            let unlocated: Vec<String> = stations
                .iter()
                .filter(|s| s.coordinate().is_none())
                .filter_map(|s| s.name.clone())
                .collect();
            let engine = build(stations);
            let results = engine.query("boston").unwrap();

            prop_assert!(results.iter().all(|r| !unlocated.contains(&r.name)));
        }

        #[test]
        fn unknown_town_echoes_input(name in "[A-Za-z ]{0,20}") {
            prop_assume!(!name.eq_ignore_ascii_case("boston"));
            let engine = build(vec![Station::default()]);
            let outcome = engine.search(&name);

            prop_assert!(outcome.error.is_some());
            prop_assert!(outcome.stations.is_empty());
            prop_assert_eq!(outcome.selected_town, name);
        }
    }
}
