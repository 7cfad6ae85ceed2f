//! Ranked, display-ready station results.

use serde::Serialize;

use crate::dataset::Station;

/// Placeholder for missing name, city and class.
const NOT_AVAILABLE: &str = "N/A";

/// A station with its distance from the queried town.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedStation {
    pub name: String,

    pub city: String,

    pub class: String,

    /// Unrounded distance, used for ordering
    #[serde(skip)]
    pub distance_km: f64,

    /// Distance in kilometres with exactly two decimals
    pub distance: String,

    /// `tel:` URI for the station's phone
    pub call_link: Option<String>,

    /// e.g. "4.5 ⭐ (120)"
    pub rating: Option<String>,

    /// Maps URL for directions
    pub directions: Option<String>,

    pub hours: Option<String>,
}

impl RankedStation {
    /// Derive display fields for a station at a known distance.
    pub fn from_station(station: &Station, distance_km: f64) -> Self {
        let name = station
            .name
            .as_ref()
            .or(station.fallback_name.as_ref())
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let phone = station.phone.as_ref().or(station.fallback_phone.as_ref());

        Self {
            name,
            city: or_not_available(station.city.as_deref()),
            class: or_not_available(station.class.as_deref()),
            distance_km,
            distance: format_distance(distance_km),
            call_link: phone.map(|p| call_link(p)),
            rating: station
                .rating
                .as_deref()
                .map(|rating| rating_label(rating, station.rating_count.as_deref())),
            directions: station.directions_url.clone(),
            hours: station.hours.clone(),
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// Format a distance in kilometres with two decimal places.
pub fn format_distance(km: f64) -> String {
    format!("{km:.2}")
}

/// Build a `tel:` link, dropping all whitespace from the number.
pub fn call_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

/// Format a rating with its review count, which defaults to 0.
pub fn rating_label(rating: &str, count: Option<&str>) -> String {
    format!("{} ⭐ ({})", rating, count.unwrap_or("0"))
}
