//! Filtering and rendering on top of the loaded datasets.
//!
//! Every function here is synchronous and CPU-only; the HTTP layer calls them
//! directly on each request.

pub mod colormap;
pub mod filters;
pub mod forest_map;
pub mod map_raster;
pub mod visitor_trends;


#[cfg(test)]
#[path = "visitor_trends_tests.rs"]
mod visitor_trends_tests;

pub use filters::{filter_by_year, filter_visitors, resolve_park};
pub use forest_map::{get_forest_map, render_forest_map};
pub use map_raster::{rasterize_map, RasterOptions};
pub use visitor_trends::{get_visitor_trends, render_visitor_trends};
