//! Reading dataset files from disk.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use super::error::DatasetError;
use super::records::{Station, Town};

/// Both datasets, loaded and validated.
///
/// Neither list is empty once construction succeeds.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub towns: Vec<Town>,
    pub stations: Vec<Station>,
}

impl Datasets {
    /// Load the towns and stations files.
    pub fn load(towns_path: &Path, stations_path: &Path) -> Result<Self, DatasetError> {
        let towns = load_towns(towns_path)?;
        let stations = load_stations(stations_path)?;

        let unlocated = stations.iter().filter(|s| s.coordinate().is_none()).count();
        info!(
            towns = towns.len(),
            stations = stations.len(),
            unlocated,
            "loaded datasets"
        );

        Ok(Self { towns, stations })
    }
}

/// Load the towns dataset.
pub fn load_towns(path: &Path) -> Result<Vec<Town>, DatasetError> {
    load_records(path)
}

/// Load the stations dataset.
pub fn load_stations(path: &Path) -> Result<Vec<Station>, DatasetError> {
    load_records(path)
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<T> = serde_json::from_str(&contents).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if records.is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(records)
}
