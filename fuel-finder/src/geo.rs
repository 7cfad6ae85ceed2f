//! Great-circle distance on a spherical Earth.

use serde::Serialize;

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Distance to another coordinate in kilometres.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// Haversine distance between two lat/lon pairs, in kilometres.
///
/// Inputs are decimal degrees. Finite inputs always give a finite,
/// non-negative result; NaN inputs propagate to a NaN result.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 near antipodal points.
    let a = a.clamp(0.0, 1.0);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn lat() -> impl Strategy<Value = f64> {
        -90.0..=90.0f64
    }

    fn lon() -> impl Strategy<Value = f64> {
        -180.0..=180.0f64
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(lat1 in lat(), lon1 in lon(), lat2 in lat(), lon2 in lon()) {
            let ab = haversine_km(lat1, lon1, lat2, lon2);
            let ba = haversine_km(lat2, lon2, lat1, lon1);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn distance_to_self_is_zero(lat1 in lat(), lon1 in lon()) {
            prop_assert!(haversine_km(lat1, lon1, lat1, lon1).abs() < 1e-9);
        }

        #[test]
        fn distance_is_bounded(lat1 in lat(), lon1 in lon(), lat2 in lat(), lon2 in lon()) {
            let d = haversine_km(lat1, lon1, lat2, lon2);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
