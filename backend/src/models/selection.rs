//! Widget selection state read by the filter layer.

use serde::{Deserialize, Serialize};

pub const DEFAULT_YEAR_MIN: i32 = 2001;
pub const DEFAULT_YEAR_MAX: i32 = 2020;

/// Bounds and initial value of the year slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_YEAR_MIN,
            max: DEFAULT_YEAR_MAX,
            default: DEFAULT_YEAR_MIN,
        }
    }
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

/// Inputs of the park filter: the comparison toggle and the park picked in the
/// selector (unset until the user chooses one).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkSelection {
    #[serde(default)]
    pub comparison_mode: bool,
    #[serde(default)]
    pub selected_park: Option<String>,
}

impl ParkSelection {
    pub fn single(park: impl Into<String>) -> Self {
        Self {
            comparison_mode: false,
            selected_park: Some(park.into()),
        }
    }

    pub fn comparison() -> Self {
        Self {
            comparison_mode: true,
            selected_park: None,
        }
    }
}

/// Full widget state of both pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_year: i32,
    #[serde(flatten)]
    pub park: ParkSelection,
}

impl SelectionState {
    /// State before any interaction: the slider's default year, comparison off
    /// and no park picked.
    pub fn initial(years: YearRange) -> Self {
        Self {
            selected_year: years.default,
            park: ParkSelection::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_bounds_are_inclusive() {
        let range = YearRange::default();
        assert!(range.contains(2001));
        assert!(range.contains(2020));
        assert!(!range.contains(2000));
        assert!(!range.contains(2021));
        assert_eq!(range.default, 2001);
    }

    #[test]
    fn test_selection_state_starts_on_first_year_without_park() {
        let state = SelectionState::initial(YearRange::default());
        assert_eq!(state.selected_year, 2001);
        assert!(!state.park.comparison_mode);
        assert!(state.park.selected_park.is_none());
    }

    #[test]
    fn test_selection_state_serializes_flat() {
        let state = SelectionState {
            selected_year: 2010,
            park: ParkSelection::single("Gir"),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "selected_year": 2010,
                "comparison_mode": false,
                "selected_park": "Gir"
            })
        );
    }

    #[test]
    fn test_park_selection_deserializes_with_defaults() {
        let selection: ParkSelection = serde_json::from_str("{}").unwrap();
        assert_eq!(selection, ParkSelection::default());
    }
}
