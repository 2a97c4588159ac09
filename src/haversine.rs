//! Great-circle distance and flat-speed travel time.
//!
//! Straight-line distance over a spherical Earth. Ignores roads entirely, so
//! it underestimates real travel but needs no external data.

/// Average speed assumption for travel time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 60.0;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
///
/// Defined for every real input; identical points give 0.
pub fn great_circle_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two `(lat, lng)` tuples.
pub fn distance_between(from: (f64, f64), to: (f64, f64)) -> f64 {
    great_circle_distance_km(from.0, from.1, to.0, to.1)
}

/// Converts distances into travel minutes at a constant speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelTimeModel {
    /// Assumed average speed in km/h.
    pub speed_kmh: f64,
}

impl Default for TravelTimeModel {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl TravelTimeModel {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Travel time in (fractional) minutes for a distance in km.
    pub fn km_to_minutes(&self, km: f64) -> f64 {
        km / self.speed_kmh * 60.0
    }
}
