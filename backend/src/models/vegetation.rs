//! Spatial vegetation cover records.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

crate::define_key_type!(SpatialUnitId);

/// Mean vegetation cover of one spatial unit in one year, joined with the
/// unit's centroid coordinates.
///
/// One record exists per `(spatial_unit_id, year)` pair. Records are built once
/// by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VegetationRecord {
    pub spatial_unit_id: SpatialUnitId,
    pub year: i32,
    /// Mean vegetation cover, in percent of the unit's land area.
    pub mean_vegetation_cover: f64,
    pub longitude: Degrees,
    pub latitude: Degrees,
}

impl VegetationRecord {
    pub fn new(
        spatial_unit_id: impl Into<SpatialUnitId>,
        year: i32,
        mean_vegetation_cover: f64,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            spatial_unit_id: spatial_unit_id.into(),
            year,
            mean_vegetation_cover,
            longitude: Degrees::new(longitude),
            latitude: Degrees::new(latitude),
        }
    }
}
