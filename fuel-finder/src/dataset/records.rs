//! Dataset record types.

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::geo::Coordinate;

/// A town with its centre coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Town {
    /// Town name, matched case-insensitively
    #[serde(rename = "town")]
    pub name: String,

    pub latitude: f64,

    pub longitude: f64,
}

impl Town {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A fuel or charging station as scraped.
///
/// Every field is optional. Empty strings decode as `None`, and a
/// coordinate that is not a finite number decodes as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Station {
    /// Name from the maps listing
    #[serde(rename = "gmap_name", default, deserialize_with = "lenient::text")]
    pub name: Option<String>,

    /// Name from the original registry
    #[serde(rename = "original_name", default, deserialize_with = "lenient::text")]
    pub fallback_name: Option<String>,

    /// "City, ST ZIP" line
    #[serde(
        rename = "original_citystatezip",
        default,
        deserialize_with = "lenient::text"
    )]
    pub city: Option<String>,

    /// Station category (e.g. "Gas", "EV Charging")
    #[serde(rename = "station_class", default, deserialize_with = "lenient::text")]
    pub class: Option<String>,

    #[serde(rename = "gmap_lat", default, deserialize_with = "lenient::number")]
    pub latitude: Option<f64>,

    #[serde(rename = "gmap_lng", default, deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,

    /// Phone number from the maps listing
    #[serde(rename = "gmap_phone", default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,

    /// Phone number from the original registry
    #[serde(
        rename = "original_phone_base",
        default,
        deserialize_with = "lenient::text"
    )]
    pub fallback_phone: Option<String>,

    /// Star rating, spelled as in the source
    #[serde(
        rename = "gmap_rating",
        default,
        deserialize_with = "lenient::numeric_text"
    )]
    pub rating: Option<String>,

    #[serde(
        rename = "gmap_rating_count",
        default,
        deserialize_with = "lenient::numeric_text"
    )]
    pub rating_count: Option<String>,

    /// Maps URL used for directions
    #[serde(rename = "gmap_url", default, deserialize_with = "lenient::text")]
    pub directions_url: Option<String>,

    /// Opening hours as displayed by the maps listing
    #[serde(rename = "gmap_hours", default, deserialize_with = "lenient::text")]
    pub hours: Option<String>,
}

impl Station {
    /// The station's position, if both coordinates are usable.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.latitude?, self.longitude?))
    }
}
