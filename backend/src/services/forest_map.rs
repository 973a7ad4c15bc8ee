use crate::api::{ColorScale, ForestMapFigure, MapPoint, MarkerStyle, Viewport};
use crate::models::VegetationRecord;
use crate::store::DatasetRepository;

use super::colormap::{greens, to_hex, Normalize, GREENS, GREENS_NAME};
use super::filters::filter_by_year;

/// Colour domain used when there is nothing to normalize against (cover is a
/// percentage).
pub const DEFAULT_COVER_DOMAIN: (f64, f64) = (0.0, 100.0);

pub const MARKER_SIZE: f64 = 50.0;
pub const MARKER_OPACITY: f64 = 0.6;

/// Build the scatter map for one year's records.
///
/// Each record becomes a point at its centroid coloured along the Greens ramp,
/// normalized to the min/max cover of `records`. The viewport is fixed to
/// India regardless of the data, and an empty input produces an empty map.
pub fn render_forest_map(records: &[VegetationRecord], year: i32) -> ForestMapFigure {
    let norm = Normalize::from_values(records.iter().map(|r| r.mean_vegetation_cover))
        .unwrap_or(Normalize {
            min: DEFAULT_COVER_DOMAIN.0,
            max: DEFAULT_COVER_DOMAIN.1,
        });

    let points: Vec<MapPoint> = records
        .iter()
        .map(|r| MapPoint {
            spatial_unit_id: r.spatial_unit_id.clone(),
            longitude: r.longitude,
            latitude: r.latitude,
            vegetation_cover: r.mean_vegetation_cover,
            color: to_hex(greens(norm.apply(r.mean_vegetation_cover))),
        })
        .collect();

    ForestMapFigure {
        title: format!("Forest Cover in India ({})", year),
        year,
        total_count: points.len(),
        points,
        viewport: Viewport::india(),
        color_scale: ColorScale {
            name: GREENS_NAME.to_string(),
            domain_min: norm.min,
            domain_max: norm.max,
            stops: GREENS.iter().map(|rgb| to_hex(*rgb)).collect(),
        },
        marker: MarkerStyle {
            size: MARKER_SIZE,
            opacity: MARKER_OPACITY,
        },
        aspect: "equal".to_string(),
    }
}

/// Filter the repository to `year` and render the map.
pub fn get_forest_map(repo: &dyn DatasetRepository, year: i32) -> ForestMapFigure {
    let records = filter_by_year(repo.vegetation_records(), year);
    render_forest_map(&records, year)
}
