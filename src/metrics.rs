//! Distance and duration totals for an ordered route.

use serde::{Deserialize, Serialize};

use crate::haversine::{TravelTimeModel, distance_between};
use crate::traits::Waypoint;

/// Totals for a route. Always recomputed from the route itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub total_distance_km: f64,
    pub total_duration_minutes: u32,
}

impl RouteMetrics {
    pub fn for_route<W: Waypoint>(route: &[W]) -> Self {
        Self {
            total_distance_km: total_distance_km(route),
            total_duration_minutes: estimate_total_duration(route),
        }
    }
}

/// Sum of great-circle distances between consecutive stops.
pub fn total_distance_km<W: Waypoint>(route: &[W]) -> f64 {
    route
        .windows(2)
        .map(|pair| distance_between(pair[0].location(), pair[1].location()))
        .sum()
}

/// Estimated minutes for the whole route at the default flat speed.
pub fn estimate_total_duration<W: Waypoint>(route: &[W]) -> u32 {
    TravelTimeModel::default().estimate_total_duration(route)
}

impl TravelTimeModel {
    /// Travel time between consecutive stops plus every stop's visit
    /// duration, rounded to whole minutes. Routes of length 0 or 1 take 0.
    pub fn estimate_total_duration<W: Waypoint>(&self, route: &[W]) -> u32 {
        if route.len() <= 1 {
            return 0;
        }

        let travel: f64 = route
            .windows(2)
            .map(|pair| {
                self.km_to_minutes(distance_between(pair[0].location(), pair[1].location()))
            })
            .sum();
        let visits: f64 = route
            .iter()
            .map(|stop| f64::from(stop.visit_duration_minutes().unwrap_or(0)))
            .sum();

        // Saturating float-to-int cast: NaN becomes 0.
        (travel + visits).round() as u32
    }
}
