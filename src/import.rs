//! Bulk destination import from tabular data.
//!
//! Spreadsheets in the wild name their columns inconsistently, so every field
//! has an ordered list of accepted header synonyms. The first synonym present
//! in the header row wins; the mapping is resolved once per import.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::address::validate_address;
use crate::error::ImportError;
use crate::model::{Coordinates, Destination, DestinationId};
use crate::table::Table;
use crate::traits::Geocoder;

pub const NAME_COLUMNS: &[&str] = &["name", "Name", "location", "Location"];
pub const ADDRESS_COLUMNS: &[&str] = &["address", "Address", "indirizzo", "Indirizzo"];
pub const LATITUDE_COLUMNS: &[&str] = &["latitude", "Latitude", "lat", "Lat"];
pub const LONGITUDE_COLUMNS: &[&str] = &["longitude", "Longitude", "lng", "Lng"];
pub const NOTES_COLUMNS: &[&str] = &["notes", "Notes", "note", "Note"];
pub const DURATION_COLUMNS: &[&str] = &["duration", "Duration", "durata", "Durata"];
pub const REQUIRED_COLUMNS: &[&str] = &["required", "Required", "obbligatorio", "Obbligatorio"];

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Imported ids are `"{id_prefix}-{row}"`.
    pub id_prefix: String,
    /// Ask the geocoder for rows without usable coordinates.
    pub geocode: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            id_prefix: "imported".to_string(),
            geocode: true,
        }
    }
}

/// Column positions for each destination field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub address: Option<usize>,
    pub latitude: Option<usize>,
    pub longitude: Option<usize>,
    pub notes: Option<usize>,
    pub duration: Option<usize>,
    pub required: Option<usize>,
}

impl ColumnMap {
    pub fn resolve(table: &Table) -> Self {
        let find = |synonyms: &[&str]| synonyms.iter().find_map(|name| table.column(name));
        Self {
            name: find(NAME_COLUMNS),
            address: find(ADDRESS_COLUMNS),
            latitude: find(LATITUDE_COLUMNS),
            longitude: find(LONGITUDE_COLUMNS),
            notes: find(NOTES_COLUMNS),
            duration: find(DURATION_COLUMNS),
            required: find(REQUIRED_COLUMNS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    MissingAddress,
    InvalidAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based data row number.
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub destinations: Vec<Destination>,
    pub skipped: Vec<SkippedRow>,
}

/// Converts table rows into destinations.
///
/// Rows without a plausible address are skipped and reported. Rows with
/// missing, unparsable or `(0, 0)` coordinates are geocoded when a geocoder
/// is given and `options.geocode` is set; otherwise (or when geocoding fails)
/// they come back with `coordinates: None`.
pub fn import_destinations(
    table: &Table,
    geocoder: Option<&dyn Geocoder>,
    options: &ImportOptions,
) -> Result<ImportReport, ImportError> {
    let columns = ColumnMap::resolve(table);
    let address_column = columns.address.ok_or(ImportError::MissingColumn("address"))?;
    let geocoder = geocoder.filter(|_| options.geocode);

    let mut report = ImportReport::default();

    for index in 0..table.len() {
        let row = index + 1;
        let read = |column: Option<usize>| column.map_or("", |column| table.cell(index, column));

        let address = table.cell(index, address_column);
        if address.is_empty() {
            warn!(row, "skipping row: missing address");
            report.skipped.push(SkippedRow {
                row,
                reason: SkipReason::MissingAddress,
            });
            continue;
        }
        if !validate_address(address) {
            warn!(row, address, "skipping row: invalid address");
            report.skipped.push(SkippedRow {
                row,
                reason: SkipReason::InvalidAddress,
            });
            continue;
        }

        let mut coordinates = parse_coordinates(read(columns.latitude), read(columns.longitude));
        if coordinates.is_none() {
            if let Some(geocoder) = geocoder {
                coordinates = geocode_row(geocoder, row, address);
            }
        }

        let name = match read(columns.name) {
            "" => format!("Destination {}", row),
            name => name.to_string(),
        };
        let notes = Some(read(columns.notes))
            .filter(|notes| !notes.is_empty())
            .map(str::to_string);

        report.destinations.push(Destination {
            id: DestinationId::new(format!("{}-{}", options.id_prefix, row)),
            name,
            address: address.to_string(),
            coordinates,
            notes,
            visit_duration_minutes: parse_duration(read(columns.duration)),
            required: parse_flag(read(columns.required)),
        });
    }

    info!(
        imported = report.destinations.len(),
        skipped = report.skipped.len(),
        "destinations imported"
    );

    Ok(report)
}

fn geocode_row(geocoder: &dyn Geocoder, row: usize, address: &str) -> Option<Coordinates> {
    match geocoder.geocode(address) {
        Ok(Some(coordinates)) => {
            debug!(row, address, lat = coordinates.lat, lng = coordinates.lng, "geocoded address");
            Some(coordinates)
        }
        Ok(None) => {
            warn!(row, address, "no geocoding match");
            None
        }
        Err(err) => {
            warn!(row, address, error = %err, "geocoding failed");
            None
        }
    }
}

/// Parses a coordinate pair. `(0, 0)` counts as missing.
fn parse_coordinates(lat: &str, lng: &str) -> Option<Coordinates> {
    let lat = parse_number(lat)?;
    let lng = parse_number(lng)?;
    let coordinates = Coordinates::new(lat, lng);
    (!coordinates.is_null_island()).then_some(coordinates)
}

/// Finite number, accepting a decimal comma.
fn parse_number(cell: &str) -> Option<f64> {
    cell.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn parse_duration(cell: &str) -> Option<u32> {
    parse_number(cell)
        .filter(|minutes| *minutes >= 0.0 && *minutes <= f64::from(u32::MAX))
        .map(|minutes| minutes.round() as u32)
}

fn parse_flag(cell: &str) -> bool {
    matches!(
        cell.to_lowercase().as_str(),
        "true" | "yes" | "y" | "sì" | "si" | "1" | "x"
    )
}

/// Sample sheet showing the expected columns.
pub fn import_template() -> Table {
    let mut table = Table::new([
        NAME_COLUMNS[0],
        ADDRESS_COLUMNS[0],
        LATITUDE_COLUMNS[0],
        LONGITUDE_COLUMNS[0],
        NOTES_COLUMNS[0],
        DURATION_COLUMNS[0],
        REQUIRED_COLUMNS[0],
    ]);
    table.push_row([
        "Milano Duomo",
        "Piazza del Duomo, 1, Milano",
        "45.4642",
        "9.1900",
        "Duomo visit",
        "120",
        "true",
    ]);
    table.push_row([
        "Bologna Piazza Maggiore",
        "Piazza Maggiore, 6, Bologna",
        "44.4938",
        "11.3426",
        "Lunch downtown",
        "90",
        "true",
    ]);
    table.push_row([
        "Firenze Duomo",
        "Piazza del Duomo, 8, Firenze",
        "43.7731",
        "11.2566",
        "Uffizi gallery",
        "180",
        "true",
    ]);
    table
}
