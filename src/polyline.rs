//! Polyline representation for route geometries.
//!
//! The map overlay in the surrounding application draws straight segments
//! between consecutive stops, so a route's geometry is just its ordered
//! coordinates. Encoding to a compact wire format belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::traits::Waypoint;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Geometry of an ordered route, one point per stop.
    ///
    /// Circular routes repeat their first point at the end, which closes the
    /// drawn loop.
    pub fn from_route<W: Waypoint>(route: &[W]) -> Self {
        Self {
            points: route.iter().map(Waypoint::location).collect(),
        }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
