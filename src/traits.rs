//! Core domain traits for the itinerary planner.
//!
//! These are intentionally minimal. Applications implement them for their own
//! destination records; the optimizer and metrics only ever read through them.

use std::hash::Hash;

use crate::error::GeocodeError;
use crate::model::Coordinates;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A single stop that can be placed on a route.
pub trait Waypoint {
    type Id: Id;

    /// Stable identifier, used for reporting only.
    fn id(&self) -> &Self::Id;

    /// Location coordinates (lat, lng) in degrees.
    ///
    /// No validation happens downstream: `(0.0, 0.0)` is a real point to the
    /// optimizer.
    fn location(&self) -> (f64, f64);

    /// Dwell time at this stop. `None` counts as zero.
    fn visit_duration_minutes(&self) -> Option<u32>;
}

impl<T> Waypoint for &T
where
    T: Waypoint + ?Sized,
{
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }

    fn location(&self) -> (f64, f64) {
        (**self).location()
    }

    fn visit_duration_minutes(&self) -> Option<u32> {
        (**self).visit_duration_minutes()
    }
}

/// Resolves a free-form address into coordinates.
///
/// Implementations usually call out to a network service; the planner core
/// never does, it only consumes what a geocoder already returned.
pub trait Geocoder {
    /// Returns `Ok(None)` when the service has no match for the address.
    fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError>;
}
