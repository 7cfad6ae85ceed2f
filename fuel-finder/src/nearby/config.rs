//! Query configuration.

/// Number of stations returned per query unless configured otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Configuration parameters for nearest-station queries.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Maximum number of stations to return.
    pub max_results: usize,
}

impl QueryConfig {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}
