//! Tabular export of the planned route.

use crate::error::ExportError;
use crate::itinerary::ItineraryState;
use crate::table::Table;

pub const EXPORT_COLUMNS: [&str; 10] = [
    "Order",
    "Name",
    "Address",
    "Latitude",
    "Longitude",
    "Notes",
    "Visit Duration (min)",
    "Required",
    "Starting Point",
    "End Point",
];

/// One row per stop of the computed itinerary, or per destination in list
/// order when no itinerary has been computed yet.
pub fn export_itinerary(state: &ItineraryState) -> Result<Table, ExportError> {
    let stops = match &state.itinerary {
        Some(itinerary) if !itinerary.route.is_empty() => &itinerary.route,
        _ => &state.destinations,
    };
    if stops.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut table = Table::new(EXPORT_COLUMNS);
    for (index, dest) in stops.iter().enumerate() {
        let (lat, lng) = dest
            .coordinates
            .map(|c| (c.lat.to_string(), c.lng.to_string()))
            .unwrap_or_default();

        table.push_row([
            (index + 1).to_string(),
            dest.name.clone(),
            dest.address.clone(),
            lat,
            lng,
            dest.notes.clone().unwrap_or_default(),
            dest.visit_duration_minutes
                .map(|minutes| minutes.to_string())
                .unwrap_or_default(),
            yes_no(dest.required),
            yes_no(state.is_starting_point(&dest.id)),
            yes_no(state.is_end_point(&dest.id)),
        ]);
    }

    Ok(table)
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "Yes" } else { "No" };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::itinerary::ItineraryAction;
    use crate::model::Destination;

    #[test]
    fn test_empty_state_cannot_export() {
        assert_eq!(export_itinerary(&ItineraryState::new()), Err(ExportError::Empty));
    }

    #[test]
    fn test_unplanned_destinations_export_in_list_order() {
        let state = ItineraryState::new()
            .apply(ItineraryAction::Import(vec![
                Destination::new("a", "Alpha", "Via Roma, 1, Torino"),
                Destination::new("b", "Beta", "Via Po, 2, Torino")
                    .with_coordinates(45.07, 7.69)
                    .with_visit_duration(45)
                    .required(true),
            ]))
            .unwrap();

        let table = export_itinerary(&state).unwrap();
        assert_eq!(table.headers, EXPORT_COLUMNS);
        assert_eq!(
            table.rows[0],
            ["1", "Alpha", "Via Roma, 1, Torino", "", "", "", "", "No", "No", "No"]
        );
        assert_eq!(
            table.rows[1],
            ["2", "Beta", "Via Po, 2, Torino", "45.07", "7.69", "", "45", "Yes", "No", "No"]
        );
    }
}
