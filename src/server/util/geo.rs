//! Great-circle distance helpers for the nearby party search.
//!
//! The database narrows candidates with a latitude/longitude bounding box; the exact
//! haversine distance is then computed here.

use entity::party::PartyStatus;
use rust_decimal::{prelude::ToPrimitive, Decimal};

/// Mean earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Default search radius for nearby parties.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;

/// Radius and status policy for the nearby party search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearbyFilter {
    pub radius_km: f64,
    /// Include DONE and CANCELED parties
    pub include_closed: bool,
}

impl Default for NearbyFilter {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_NEARBY_RADIUS_KM,
            include_closed: false,
        }
    }
}

impl NearbyFilter {
    /// Statuses a party may have to show up in the search.
    pub fn statuses(&self) -> Vec<PartyStatus> {
        if self.include_closed {
            vec![
                PartyStatus::Recruiting,
                PartyStatus::Joined,
                PartyStatus::Done,
                PartyStatus::Canceled,
            ]
        } else {
            vec![PartyStatus::Recruiting, PartyStatus::Joined]
        }
    }
}

/// Latitude/longitude window that contains every point within a radius.
///
/// `longitude` is `None` when the window touches a pole or crosses the antimeridian, in
/// which case longitude is left unfiltered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub latitude: (f64, f64),
    pub longitude: Option<(f64, f64)>,
}

impl BoundingBox {
    pub fn around(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        let angular = radius_km / EARTH_RADIUS_KM;
        let lat_delta = angular.to_degrees();
        let min_lat = latitude - lat_delta;
        let max_lat = latitude + lat_delta;

        if min_lat <= -90.0 || max_lat >= 90.0 {
            return Self {
                latitude: (min_lat.max(-90.0), max_lat.min(90.0)),
                longitude: None,
            };
        }

        let ratio = angular.sin() / latitude.to_radians().cos();
        if ratio >= 1.0 {
            return Self {
                latitude: (min_lat, max_lat),
                longitude: None,
            };
        }

        let lon_delta = ratio.asin().to_degrees();
        let min_lon = longitude - lon_delta;
        let max_lon = longitude + lon_delta;

        let longitude = if min_lon < -180.0 || max_lon > 180.0 {
            None
        } else {
            Some((min_lon, max_lon))
        };

        Self {
            latitude: (min_lat, max_lat),
            longitude,
        }
    }
}

/// Haversine distance between two points in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Converts a stored coordinate to `f64`.
pub fn coordinate(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
