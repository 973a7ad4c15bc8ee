//! Data Transfer Objects for the HTTP API.
//!
//! Figure and chart DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{AppLayout, DatasetSummary, ForestMapFigure, TrendChartSpec};
use crate::models::ParkSelection;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub datasets: DatasetSummary,
}

/// Query parameters for the forest cover endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForestMapQuery {
    /// Year to show; the slider default when absent
    #[serde(default)]
    pub year: Option<i32>,
    /// PNG width in pixels
    #[serde(default)]
    pub width: Option<u32>,
}

/// Query parameters for the visitor trends endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisitorTrendsQuery {
    /// Comparison toggle
    #[serde(default)]
    pub compare: Option<bool>,
    #[serde(default)]
    pub park: Option<String>,
}

impl VisitorTrendsQuery {
    /// Selection this query stands for. A blank `park` counts as unset.
    pub fn to_selection(&self) -> ParkSelection {
        ParkSelection {
            comparison_mode: self.compare.unwrap_or(false),
            selected_park: self
                .park
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }
    }
}

/// Response for park listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkListResponse {
    pub parks: Vec<String>,
    pub total: usize,
}
