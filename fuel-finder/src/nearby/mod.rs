//! Nearest-stations query engine.
//!
//! Given a town name, resolves it against the towns dataset and ranks
//! every located station by great-circle distance from the town centre.
//! The engine owns its datasets and never mutates them, so a single
//! instance can serve any number of concurrent queries.

mod config;
mod engine;
mod error;
mod ranked;

pub use config::{DEFAULT_MAX_RESULTS, QueryConfig};
pub use engine::{NearbyStations, SearchOutcome};
pub use error::QueryError;
pub use ranked::{RankedStation, call_link, format_distance, rating_label};
