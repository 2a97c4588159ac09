//! Concrete itinerary records: destinations, coordinates and route preferences.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::traits::Waypoint;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True for exactly `(0, 0)`, which older data uses to mean "not geocoded".
    pub fn is_null_island(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(String);

impl DestinationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DestinationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A place the user wants to visit.
///
/// `coordinates` is `None` until the address has been geocoded. Only resolved
/// destinations take part in route optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub notes: Option<String>,
    pub visit_duration_minutes: Option<u32>,
    pub required: bool,
}

impl Destination {
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: DestinationId::new(id),
            name: name.into(),
            address: address.into(),
            coordinates: None,
            notes: None,
            visit_duration_minutes: None,
            required: false,
        }
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(Coordinates::new(lat, lng));
        self
    }

    pub fn with_visit_duration(mut self, minutes: u32) -> Self {
        self.visit_duration_minutes = Some(minutes);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Waypoint view of this destination, if it has coordinates.
    pub fn resolved(&self) -> Option<ResolvedDestination<'_>> {
        self.coordinates.map(|coordinates| ResolvedDestination {
            destination: self,
            coordinates,
        })
    }
}

/// A destination whose coordinates are known.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedDestination<'a> {
    destination: &'a Destination,
    coordinates: Coordinates,
}

impl<'a> ResolvedDestination<'a> {
    pub fn destination(&self) -> &'a Destination {
        self.destination
    }
}

impl Waypoint for ResolvedDestination<'_> {
    type Id = DestinationId;

    fn id(&self) -> &Self::Id {
        &self.destination.id
    }

    fn location(&self) -> (f64, f64) {
        self.coordinates.as_tuple()
    }

    fn visit_duration_minutes(&self) -> Option<u32> {
        self.destination.visit_duration_minutes
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    #[default]
    Fastest,
    Scenic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

/// User route preferences.
///
/// Stored with the itinerary but not consulted by the duration estimate,
/// which always assumes a flat driving speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePreferences {
    pub route_type: RouteType,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    pub transport_mode: TransportMode,
}

/// Partial preference update; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPatch {
    pub route_type: Option<RouteType>,
    pub avoid_tolls: Option<bool>,
    pub avoid_highways: Option<bool>,
    pub transport_mode: Option<TransportMode>,
}

impl RoutePreferences {
    pub fn merge(self, patch: PreferencesPatch) -> Self {
        Self {
            route_type: patch.route_type.unwrap_or(self.route_type),
            avoid_tolls: patch.avoid_tolls.unwrap_or(self.avoid_tolls),
            avoid_highways: patch.avoid_highways.unwrap_or(self.avoid_highways),
            transport_mode: patch.transport_mode.unwrap_or(self.transport_mode),
        }
    }
}
