//! Tabular import tests
//!
//! Column synonyms, skipped rows and the geocoding fallback.

mod fixtures;

use std::cell::RefCell;
use std::collections::HashMap;

use itinerary_planner::error::{GeocodeError, ImportError};
use itinerary_planner::import::{ImportOptions, SkipReason, SkippedRow, import_destinations};
use itinerary_planner::itinerary::{ItineraryAction, ItineraryState};
use itinerary_planner::model::Coordinates;
use itinerary_planner::table::Table;
use itinerary_planner::traits::Geocoder;

use fixtures::{BOLOGNA, FLORENCE, MILAN};

/// Geocoder backed by a fixed lookup table that records every query.
struct MockGeocoder {
    known: HashMap<&'static str, Coordinates>,
    failing: Vec<&'static str>,
    queries: RefCell<Vec<String>>,
}

impl MockGeocoder {
    fn new() -> Self {
        let mut known = HashMap::new();
        known.insert(MILAN.address, Coordinates::new(MILAN.lat, MILAN.lng));
        known.insert(FLORENCE.address, Coordinates::new(FLORENCE.lat, FLORENCE.lng));
        Self {
            known,
            failing: Vec::new(),
            queries: RefCell::new(Vec::new()),
        }
    }

    fn failing_on(mut self, address: &'static str) -> Self {
        self.failing.push(address);
        self
    }
}

impl Geocoder for MockGeocoder {
    fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        self.queries.borrow_mut().push(address.to_string());
        if self.failing.iter().any(|failing| *failing == address) {
            return Err(GeocodeError::InvalidResponse("service unavailable".to_string()));
        }
        Ok(self.known.get(address).copied())
    }
}

fn italian_sheet() -> Table {
    let mut table = Table::new([
        "Nome",
        "Indirizzo",
        "Lat",
        "Lng",
        "Note",
        "Durata",
        "Obbligatorio",
    ]);
    table.push_row([MILAN.name, MILAN.address, "45.4642", "9.19", "Duomo", "120", "sì"]);
    table.push_row(["Bologna", BOLOGNA.address, "44,4938", "11,3426", "", "90", "no"]);
    table.push_row(["Firenze", FLORENCE.address, "0", "0", "", "", ""]);
    table
}

#[test]
fn italian_headers_resolve_through_synonyms() {
    let report = import_destinations(&italian_sheet(), None, &ImportOptions::default()).unwrap();

    assert_eq!(report.destinations.len(), 3);
    let milan = &report.destinations[0];
    assert_eq!(milan.id.as_str(), "imported-1");
    assert_eq!(milan.address, MILAN.address);
    assert_eq!(milan.coordinates, Some(Coordinates::new(45.4642, 9.19)));
    assert_eq!(milan.notes.as_deref(), Some("Duomo"));
    assert_eq!(milan.visit_duration_minutes, Some(120));
    assert!(milan.required);

    let bologna = &report.destinations[1];
    assert_eq!(bologna.coordinates, Some(Coordinates::new(44.4938, 11.3426)));
    assert_eq!(bologna.notes, None);
    assert!(!bologna.required);
}

#[test]
fn unmatched_name_column_falls_back_to_row_number() {
    // "Nome" is not a recognised name synonym
    let report = import_destinations(&italian_sheet(), None, &ImportOptions::default()).unwrap();
    assert_eq!(report.destinations[0].name, "Destination 1");
}

#[test]
fn null_island_without_geocoder_stays_unresolved() {
    let report = import_destinations(&italian_sheet(), None, &ImportOptions::default()).unwrap();
    assert_eq!(report.destinations[2].coordinates, None);
}

#[test]
fn geocoder_fills_missing_coordinates_only() {
    let geocoder = MockGeocoder::new();
    let report =
        import_destinations(&italian_sheet(), Some(&geocoder), &ImportOptions::default()).unwrap();

    assert_eq!(
        report.destinations[2].coordinates,
        Some(Coordinates::new(FLORENCE.lat, FLORENCE.lng))
    );
    assert_eq!(*geocoder.queries.borrow(), vec![FLORENCE.address.to_string()]);
}

#[test]
fn geocoding_can_be_disabled() {
    let geocoder = MockGeocoder::new();
    let options = ImportOptions {
        geocode: false,
        ..ImportOptions::default()
    };
    let report = import_destinations(&italian_sheet(), Some(&geocoder), &options).unwrap();

    assert_eq!(report.destinations[2].coordinates, None);
    assert!(geocoder.queries.borrow().is_empty());
}

#[test]
fn geocoder_failure_leaves_row_unresolved() {
    let geocoder = MockGeocoder::new().failing_on(FLORENCE.address);
    let report =
        import_destinations(&italian_sheet(), Some(&geocoder), &ImportOptions::default()).unwrap();

    assert_eq!(report.destinations.len(), 3);
    assert_eq!(report.destinations[2].coordinates, None);
}

#[test]
fn bad_addresses_are_skipped_and_reported() {
    let mut table = Table::new(["name", "address"]);
    table.push_row(["Ok", MILAN.address]);
    table.push_row(["Blank", "   "]);
    table.push_row(["Short"]);
    table.push_row(["No city", "Via Roma 12"]);

    let options = ImportOptions {
        id_prefix: "batch".to_string(),
        ..ImportOptions::default()
    };
    let report = import_destinations(&table, None, &options).unwrap();

    assert_eq!(report.destinations.len(), 1);
    assert_eq!(report.destinations[0].id.as_str(), "batch-1");
    assert_eq!(
        report.skipped,
        vec![
            SkippedRow { row: 2, reason: SkipReason::MissingAddress },
            SkippedRow { row: 3, reason: SkipReason::MissingAddress },
            SkippedRow { row: 4, reason: SkipReason::InvalidAddress },
        ]
    );
}

#[test]
fn table_without_address_column_is_rejected() {
    let table = Table::new(["name", "city"]);
    let err = import_destinations(&table, None, &ImportOptions::default()).unwrap_err();
    assert_eq!(err, ImportError::MissingColumn("address"));
}

#[test]
fn imported_destinations_feed_the_planner() {
    let geocoder = MockGeocoder::new();
    let report =
        import_destinations(&italian_sheet(), Some(&geocoder), &ImportOptions::default()).unwrap();

    let state = ItineraryState::new()
        .apply(ItineraryAction::Import(report.destinations))
        .unwrap()
        .apply(ItineraryAction::CreateItinerary)
        .unwrap();
    let itinerary = state.itinerary.unwrap();

    assert_eq!(itinerary.route.len(), 3);
    assert!(itinerary.unresolved.is_empty());
}
