//! Planner session state with reducer-style updates.
//!
//! The application owns one [`ItineraryState`] and threads it through
//! [`ItineraryState::apply`]. Every update consumes the old state and returns
//! the new one, or an error with no partial change.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ItineraryError;
use crate::metrics::RouteMetrics;
use crate::model::{
    Destination, DestinationId, PreferencesPatch, ResolvedDestination, RoutePreferences,
};
use crate::optimizer::optimize_route;

/// A computed route and its totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Stops in visiting order. Circular routes end with the first stop again.
    pub route: Vec<Destination>,
    pub metrics: RouteMetrics,
    /// Destinations left out because their coordinates are unknown.
    pub unresolved: Vec<DestinationId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryAction {
    Add(Destination),
    Remove(DestinationId),
    Update(Destination),
    Clear,
    UpdatePreferences(PreferencesPatch),
    Reorder { from: usize, to: usize },
    Import(Vec<Destination>),
    SetStartingPoint(Option<DestinationId>),
    SetEndPoint(Option<DestinationId>),
    CreateItinerary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryState {
    pub destinations: Vec<Destination>,
    pub preferences: RoutePreferences,
    pub starting_point: Option<DestinationId>,
    pub end_point: Option<DestinationId>,
    /// Last computed itinerary. Dropped whenever destinations or endpoints
    /// change.
    pub itinerary: Option<Itinerary>,
}

impl ItineraryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|dest| &dest.id == id)
    }

    pub fn is_starting_point(&self, id: &DestinationId) -> bool {
        self.starting_point.as_ref() == Some(id)
    }

    pub fn is_end_point(&self, id: &DestinationId) -> bool {
        self.end_point.as_ref() == Some(id)
    }

    pub fn apply(mut self, action: ItineraryAction) -> Result<Self, ItineraryError> {
        match action {
            ItineraryAction::Add(destination) => {
                if self.destination(&destination.id).is_some() {
                    return Err(ItineraryError::DuplicateDestination(destination.id));
                }
                self.destinations.push(destination);
                self.itinerary = None;
            }
            ItineraryAction::Remove(id) => {
                self.destinations.retain(|dest| dest.id != id);
                if self.is_starting_point(&id) {
                    self.starting_point = None;
                }
                if self.is_end_point(&id) {
                    self.end_point = None;
                }
                self.itinerary = None;
            }
            ItineraryAction::Update(destination) => {
                let slot = self
                    .destinations
                    .iter_mut()
                    .find(|dest| dest.id == destination.id)
                    .ok_or_else(|| ItineraryError::UnknownDestination(destination.id.clone()))?;
                *slot = destination;
                self.itinerary = None;
            }
            ItineraryAction::Clear => {
                self = Self {
                    preferences: self.preferences,
                    ..Self::default()
                };
            }
            ItineraryAction::UpdatePreferences(patch) => {
                self.preferences = self.preferences.merge(patch);
            }
            ItineraryAction::Reorder { from, to } => {
                let len = self.destinations.len();
                for index in [from, to] {
                    if index >= len {
                        return Err(ItineraryError::InvalidIndex { index, len });
                    }
                }
                let moved = self.destinations.remove(from);
                self.destinations.insert(to, moved);
                self.itinerary = None;
            }
            ItineraryAction::Import(destinations) => {
                for (i, destination) in destinations.iter().enumerate() {
                    let clashes = self.destination(&destination.id).is_some()
                        || destinations[..i].iter().any(|other| other.id == destination.id);
                    if clashes {
                        return Err(ItineraryError::DuplicateDestination(destination.id.clone()));
                    }
                }
                self.destinations.extend(destinations);
                self.itinerary = None;
            }
            ItineraryAction::SetStartingPoint(id) => {
                self.ensure_known(id.as_ref())?;
                if id.is_some() && id == self.end_point {
                    self.end_point = None;
                }
                self.starting_point = id;
                self.itinerary = None;
            }
            ItineraryAction::SetEndPoint(id) => {
                self.ensure_known(id.as_ref())?;
                if id.is_some() && id == self.starting_point {
                    self.starting_point = None;
                }
                self.end_point = id;
                self.itinerary = None;
            }
            ItineraryAction::CreateItinerary => {
                self.itinerary = self.build_itinerary()?;
            }
        }

        Ok(self)
    }

    fn ensure_known(&self, id: Option<&DestinationId>) -> Result<(), ItineraryError> {
        match id {
            Some(id) if self.destination(id).is_none() => {
                Err(ItineraryError::UnknownDestination(id.clone()))
            }
            _ => Ok(()),
        }
    }

    fn build_itinerary(&self) -> Result<Option<Itinerary>, ItineraryError> {
        if self.destinations.is_empty() {
            return Ok(None);
        }

        let resolved: Vec<ResolvedDestination<'_>> = self
            .destinations
            .iter()
            .filter_map(Destination::resolved)
            .collect();
        let unresolved: Vec<DestinationId> = self
            .destinations
            .iter()
            .filter(|dest| dest.coordinates.is_none())
            .map(|dest| dest.id.clone())
            .collect();

        let position_of = |mark: &Option<DestinationId>| {
            mark.as_ref().and_then(|id| {
                resolved
                    .iter()
                    .position(|stop| &stop.destination().id == id)
            })
        };
        let start_index = position_of(&self.starting_point).unwrap_or(0);
        let end_index = position_of(&self.end_point);

        let route = optimize_route(&resolved, start_index, end_index)?;
        let metrics = RouteMetrics::for_route(&route);

        info!(
            stops = route.len(),
            unresolved = unresolved.len(),
            distance_km = metrics.total_distance_km,
            duration_min = metrics.total_duration_minutes,
            "itinerary created"
        );

        Ok(Some(Itinerary {
            route: route.iter().map(|stop| stop.destination().clone()).collect(),
            metrics,
            unresolved,
        }))
    }
}
