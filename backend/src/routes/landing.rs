use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::SelectionState;

/// Counts and provenance of the datasets loaded at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub vegetation_records: usize,
    pub visitor_records: usize,
    pub parks: usize,
    pub years: Vec<i32>,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSlider {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub value: i32,
}

/// Everything a shell needs to lay out the two pages and their widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppLayout {
    pub title: String,
    pub pages: Vec<PageInfo>,
    pub year_slider: YearSlider,
    pub park_choices: Vec<String>,
    /// Widget state the shell starts from
    pub initial_selection: SelectionState,
}

pub const APP_TITLE: &str = "National Park Data Explorer";
pub const FOREST_COVER_PAGE: &str = "forest-cover";
pub const TOURISM_PAGE: &str = "tourism";

/// Route function name constant
pub const GET_APP_LAYOUT: &str = "get_app_layout";

/// Build the layout from the slider bounds and the loaded park names.
pub fn app_layout(years: crate::models::YearRange, parks: &[String]) -> AppLayout {
    AppLayout {
        title: APP_TITLE.to_string(),
        pages: vec![
            PageInfo {
                id: FOREST_COVER_PAGE.to_string(),
                title: "Forest Cover".to_string(),
            },
            PageInfo {
                id: TOURISM_PAGE.to_string(),
                title: "Tourism Analysis".to_string(),
            },
        ],
        year_slider: YearSlider {
            min: years.min,
            max: years.max,
            step: 1,
            value: years.default,
        },
        park_choices: parks.to_vec(),
        initial_selection: SelectionState::initial(years),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YearRange;

    #[test]
    fn test_app_layout_pages_and_slider() {
        let parks = vec!["Jim Corbett".to_string(), "Kaziranga".to_string()];
        let layout = app_layout(YearRange::default(), &parks);

        assert_eq!(layout.title, "National Park Data Explorer");
        assert_eq!(layout.pages.len(), 2);
        assert_eq!(layout.pages[0].title, "Forest Cover");
        assert_eq!(layout.pages[1].id, "tourism");
        assert_eq!(
            layout.year_slider,
            YearSlider {
                min: 2001,
                max: 2020,
                step: 1,
                value: 2001
            }
        );
        assert_eq!(layout.park_choices, parks);
        assert_eq!(layout.initial_selection.selected_year, 2001);
        assert!(!layout.initial_selection.park.comparison_mode);
        assert!(layout.initial_selection.park.selected_park.is_none());
    }

    #[test]
    fn test_initial_selection_follows_configured_default_year() {
        let years = YearRange {
            min: 2005,
            max: 2015,
            default: 2010,
        };
        let layout = app_layout(years, &[]);
        assert_eq!(layout.year_slider.value, 2010);
        assert_eq!(layout.initial_selection.selected_year, 2010);
    }
}
