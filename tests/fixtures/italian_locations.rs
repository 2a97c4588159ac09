//! Real Italian locations for realistic test fixtures.
//!
//! Coordinates are city-centre landmarks taken from OpenStreetMap.

use itinerary_planner::model::Destination;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub address: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, address: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, address, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Resolved destination with the given id.
    pub fn destination(&self, id: &str) -> Destination {
        Destination::new(id, self.name, self.address).with_coordinates(self.lat, self.lng)
    }
}

pub const MILAN: Location = Location::new(
    "Milano Duomo",
    "Piazza del Duomo, 1, Milano",
    45.4642,
    9.1900,
);
pub const BOLOGNA: Location = Location::new(
    "Bologna Piazza Maggiore",
    "Piazza Maggiore, 6, Bologna",
    44.4938,
    11.3426,
);
pub const FLORENCE: Location = Location::new(
    "Firenze Duomo",
    "Piazza del Duomo, 8, Firenze",
    43.7731,
    11.2566,
);

// ============================================================================
// Northern Italy
// ============================================================================

pub const NORTH: &[Location] = &[
    MILAN,
    Location::new("Torino Piazza Castello", "Piazza Castello, 1, Torino", 45.0712, 7.6857),
    Location::new("Venezia San Marco", "Piazza San Marco, 1, Venezia", 45.4341, 12.3388),
    Location::new("Verona Arena", "Piazza Bra, 1, Verona", 45.4390, 10.9944),
    Location::new("Genova Piazza De Ferrari", "Piazza De Ferrari, 1, Genova", 44.4072, 8.9339),
    BOLOGNA,
];

// ============================================================================
// Central Italy
// ============================================================================

pub const CENTRAL: &[Location] = &[
    FLORENCE,
    Location::new("Pisa Piazza dei Miracoli", "Piazza del Duomo, 1, Pisa", 43.7230, 10.3966),
    Location::new("Siena Piazza del Campo", "Piazza del Campo, 1, Siena", 43.3184, 11.3316),
    Location::new("Perugia Corso Vannucci", "Corso Vannucci, 19, Perugia", 43.1107, 12.3892),
    Location::new("Roma Colosseo", "Piazza del Colosseo, 1, Roma", 41.8902, 12.4922),
];

// ============================================================================
// Southern Italy
// ============================================================================

pub const SOUTH: &[Location] = &[
    Location::new(
        "Napoli Piazza del Plebiscito",
        "Piazza del Plebiscito, 1, Napoli",
        40.8359,
        14.2488,
    ),
    Location::new("Bari Basilica di San Nicola", "Largo Abate Elia, 13, Bari", 41.1306, 16.8700),
    Location::new("Palermo Cattedrale", "Corso Vittorio Emanuele, 490, Palermo", 38.1146, 13.3560),
];

/// Returns all locations as a single list.
pub fn all_locations() -> Vec<Location> {
    let mut all = Vec::with_capacity(NORTH.len() + CENTRAL.len() + SOUTH.len());
    all.extend_from_slice(NORTH);
    all.extend_from_slice(CENTRAL);
    all.extend_from_slice(SOUTH);
    all
}

/// Destinations for every location, with ids `d0`, `d1`, ...
pub fn all_destinations() -> Vec<Destination> {
    all_locations()
        .iter()
        .enumerate()
        .map(|(i, location)| location.destination(&format!("d{}", i)))
        .collect()
}
