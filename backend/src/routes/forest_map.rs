use serde::{Deserialize, Serialize};

/// Longitude/latitude window covering India.
pub const INDIA_LON_MIN: f64 = 65.0;
pub const INDIA_LON_MAX: f64 = 98.0;
pub const INDIA_LAT_MIN: f64 = 8.0;
pub const INDIA_LAT_MAX: f64 = 37.0;

/// One spatial unit drawn on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub spatial_unit_id: crate::models::SpatialUnitId,
    pub longitude: qtty::Degrees,
    pub latitude: qtty::Degrees,
    pub vegetation_cover: f64,
    /// Fill colour as `#rrggbb`
    pub color: String,
}

/// Fixed plotting window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub lon_min: qtty::Degrees,
    pub lon_max: qtty::Degrees,
    pub lat_min: qtty::Degrees,
    pub lat_max: qtty::Degrees,
}

impl Viewport {
    pub fn india() -> Self {
        Self {
            lon_min: qtty::Degrees::new(INDIA_LON_MIN),
            lon_max: qtty::Degrees::new(INDIA_LON_MAX),
            lat_min: qtty::Degrees::new(INDIA_LAT_MIN),
            lat_max: qtty::Degrees::new(INDIA_LAT_MAX),
        }
    }

    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        (self.lon_min.value()..=self.lon_max.value()).contains(&longitude)
            && (self.lat_min.value()..=self.lat_max.value()).contains(&latitude)
    }
}

/// Continuous colour scale legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub name: String,
    pub domain_min: f64,
    pub domain_max: f64,
    /// Evenly spaced ramp colours from `domain_min` to `domain_max`
    pub stops: Vec<String>,
}

/// Scatter marker styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Marker area in points squared
    pub size: f64,
    pub opacity: f64,
}

/// Forest cover scatter map for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestMapFigure {
    pub title: String,
    pub year: i32,
    pub points: Vec<MapPoint>,
    pub viewport: Viewport,
    pub color_scale: ColorScale,
    pub marker: MarkerStyle,
    /// Always `"equal"`: one degree spans the same length on both axes
    pub aspect: String,
    pub total_count: usize,
}

/// Route function name constant
pub const GET_FOREST_MAP: &str = "get_forest_map";
pub const GET_FOREST_MAP_PNG: &str = "get_forest_map_png";
