//! Public API surface of the explorer.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::forest_map::ColorScale;
pub use crate::routes::forest_map::ForestMapFigure;
pub use crate::routes::forest_map::MapPoint;
pub use crate::routes::forest_map::MarkerStyle;
pub use crate::routes::forest_map::Viewport;
pub use crate::routes::landing::AppLayout;
pub use crate::routes::landing::DatasetSummary;
pub use crate::routes::landing::PageInfo;
pub use crate::routes::landing::YearSlider;
pub use crate::routes::visitor_trends::ColorEncoding;
pub use crate::routes::visitor_trends::FieldEncoding;
pub use crate::routes::visitor_trends::FieldType;
pub use crate::routes::visitor_trends::InlineData;
pub use crate::routes::visitor_trends::Legend;
pub use crate::routes::visitor_trends::LineMark;
pub use crate::routes::visitor_trends::TrendChartSpec;
pub use crate::routes::visitor_trends::TrendEncoding;
pub use crate::routes::visitor_trends::TrendPoint;

pub use crate::models::{
    ParkSelection, SelectionState, SpatialUnitId, VegetationRecord, VisitorRecord, YearRange,
};
