//! Derived views over the static datasets.
//!
//! Both filters are pure functions of the records and the current selection:
//! calling them twice with the same inputs yields identical output, and an
//! empty result is a valid view rather than an error.

use log::debug;

use crate::models::{ParkSelection, VegetationRecord, VisitorRecord};

/// Vegetation records observed in `year`, in input order.
pub fn filter_by_year(records: &[VegetationRecord], year: i32) -> Vec<VegetationRecord> {
    let filtered: Vec<VegetationRecord> = records
        .iter()
        .filter(|r| r.year == year)
        .cloned()
        .collect();
    debug!("year filter {}: {} of {} records", year, filtered.len(), records.len());
    filtered
}

/// The park a non-comparison selection refers to.
///
/// An explicit choice wins; before the user picks one the first park in
/// source column order is used, which is what the park selector shows by
/// default. Returns `None` in comparison mode or when there are no parks.
pub fn resolve_park<'a>(selection: &'a ParkSelection, parks: &'a [String]) -> Option<&'a str> {
    if selection.comparison_mode {
        return None;
    }
    match selection.selected_park.as_deref() {
        Some(park) => Some(park),
        None => parks.first().map(String::as_str),
    }
}

/// Visitor records for the current park selection.
///
/// Comparison mode returns every record regardless of `selected_park`.
/// Otherwise only the resolved park's records are kept; an unknown park
/// yields an empty view.
pub fn filter_visitors(
    records: &[VisitorRecord],
    parks: &[String],
    selection: &ParkSelection,
) -> Vec<VisitorRecord> {
    if selection.comparison_mode {
        return records.to_vec();
    }

    let Some(park) = resolve_park(selection, parks) else {
        return Vec::new();
    };

    let filtered: Vec<VisitorRecord> = records
        .iter()
        .filter(|r| r.park_name == park)
        .cloned()
        .collect();
    debug!("park filter '{}': {} records", park, filtered.len());
    filtered
}
