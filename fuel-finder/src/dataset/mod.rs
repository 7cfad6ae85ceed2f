//! Town and station datasets.
//!
//! Both datasets are JSON arrays read once at startup. Towns are strict
//! records; stations are hand-scraped and decoded leniently so that a
//! missing or malformed optional field never fails the whole load.

mod error;
mod lenient;
mod loader;
mod records;

pub use error::DatasetError;
pub use loader::{Datasets, load_stations, load_towns};
pub use records::{Station, Town};
