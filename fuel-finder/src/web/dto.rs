//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query string for a station search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Town name, matched ignoring case
    pub town: Option<String>,
}

/// Response listing every known town.
#[derive(Debug, Serialize)]
pub struct TownListResponse {
    /// Town names, sorted ascending
    pub towns: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
