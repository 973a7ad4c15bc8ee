//! PNG rendering of a forest map figure.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageBuffer, ImageEncoder, Rgb};

use crate::api::ForestMapFigure;
use crate::store::{ErrorContext, StoreError, StoreResult};

pub const DEFAULT_RASTER_WIDTH: u32 = 800;
pub const MIN_RASTER_WIDTH: u32 = 64;
pub const MAX_RASTER_WIDTH: u32 = 4096;

/// Options for PNG rendering.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Image width in pixels; height follows from the viewport's aspect.
    pub width: u32,
    pub background: [u8; 3],
    pub compression: CompressionType,
    pub filter: FilterType,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_RASTER_WIDTH,
            background: [255, 255, 255],
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

impl RasterOptions {
    pub fn with_width(width: u32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }
}

/// Pixel dimensions for `figure` at `width`, keeping one degree the same
/// length on both axes.
pub fn raster_dimensions(figure: &ForestMapFigure, width: u32) -> (u32, u32) {
    let vp = &figure.viewport;
    let lon_span = vp.lon_max.value() - vp.lon_min.value();
    let lat_span = vp.lat_max.value() - vp.lat_min.value();
    let height = (width as f64 * lat_span / lon_span).round().max(1.0) as u32;
    (width, height)
}

/// Render the figure's points as alpha-blended discs and encode as PNG.
///
/// Points outside the viewport are clipped; an empty figure renders as a
/// blank background.
pub fn rasterize_map(figure: &ForestMapFigure, options: &RasterOptions) -> StoreResult<Vec<u8>> {
    if !(MIN_RASTER_WIDTH..=MAX_RASTER_WIDTH).contains(&options.width) {
        return Err(StoreError::render_with_context(
            format!(
                "width must be within {}..={}",
                MIN_RASTER_WIDTH, MAX_RASTER_WIDTH
            ),
            ErrorContext::new("rasterize_map").with_entity_id(options.width),
        ));
    }

    let (width, height) = raster_dimensions(figure, options.width);
    let mut img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_pixel(width, height, Rgb(options.background));

    let vp = &figure.viewport;
    let lon_min = vp.lon_min.value();
    let lat_max = vp.lat_max.value();
    let px_per_deg = (width - 1) as f64 / (vp.lon_max.value() - lon_min);

    // marker size is an area in pt^2, scaled so the default width matches an
    // 800px canvas
    let radius = (figure.marker.size.sqrt() / 2.0 * width as f64 / DEFAULT_RASTER_WIDTH as f64).max(1.0);
    let alpha = figure.marker.opacity.clamp(0.0, 1.0);

    for point in &figure.points {
        let lon = point.longitude.value();
        let lat = point.latitude.value();
        if !vp.contains(lon, lat) {
            continue;
        }
        let Some(color) = parse_hex(&point.color) else {
            continue;
        };

        let cx = (lon - lon_min) * px_per_deg;
        let cy = (lat_max - lat) * px_per_deg;
        draw_disc(&mut img, cx, cy, radius, color, alpha);
    }

    let mut bytes = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut bytes, options.compression, options.filter);
    encoder
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| {
            StoreError::render_with_context(
                e.to_string(),
                ErrorContext::new("rasterize_map").with_entity("png"),
            )
        })?;

    Ok(bytes)
}

fn draw_disc(
    img: &mut ImageBuffer<Rgb<u8>, Vec<u8>>,
    cx: f64,
    cy: f64,
    radius: f64,
    color: [u8; 3],
    alpha: f64,
) {
    let (width, height) = img.dimensions();
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil() as u32).min(width - 1);
    let y1 = ((cy + radius).ceil() as u32).min(height - 1);
    let r2 = radius * radius;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let pixel = img.get_pixel_mut(x, y);
            for c in 0..3 {
                let blended = color[c] as f64 * alpha + pixel.0[c] as f64 * (1.0 - alpha);
                pixel.0[c] = blended.round() as u8;
            }
        }
    }
}

fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VegetationRecord;
    use crate::services::forest_map::render_forest_map;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#00441b"), Some([0x00, 0x44, 0x1b]));
        assert_eq!(parse_hex("00441b"), None);
        assert_eq!(parse_hex("#0044"), None);
        assert_eq!(parse_hex("#zz441b"), None);
    }

    #[test]
    fn test_raster_dimensions_keep_equal_aspect() {
        let figure = render_forest_map(&[], 2001);
        // 33 degrees wide, 29 degrees tall
        assert_eq!(raster_dimensions(&figure, 330), (330, 290));
    }

    #[test]
    fn test_empty_figure_is_blank_png() {
        let figure = render_forest_map(&[], 2001);
        let bytes = rasterize_map(&figure, &RasterOptions::with_width(100)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (100, 88));
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_points_are_drawn_at_their_coordinates() {
        let records = vec![
            VegetationRecord::new("low", 2005, 0.0, 70.0, 30.0),
            VegetationRecord::new("high", 2005, 100.0, 90.0, 15.0),
        ];
        let figure = render_forest_map(&records, 2005);
        let bytes = rasterize_map(&figure, &RasterOptions::default()).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();

        let (width, _) = img.dimensions();
        let px_per_deg = (width - 1) as f64 / 33.0;
        let at = |lon: f64, lat: f64| {
            let x = ((lon - 65.0) * px_per_deg).round() as u32;
            let y = ((37.0 - lat) * px_per_deg).round() as u32;
            img.get_pixel(x, y).0
        };

        // dark green blended at 0.6 over white
        let high = at(90.0, 15.0);
        assert!(high[0] < 150 && high[1] < 200);
        assert!(high[1] > high[0]);
        // corner stays background
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_points_outside_viewport_are_clipped() {
        let records = vec![VegetationRecord::new("far", 2005, 50.0, 120.0, 50.0)];
        let figure = render_forest_map(&records, 2005);
        let bytes = rasterize_map(&figure, &RasterOptions::with_width(64)).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_width_out_of_range_is_error() {
        let figure = render_forest_map(&[], 2001);
        assert!(rasterize_map(&figure, &RasterOptions::with_width(10)).is_err());
        assert!(rasterize_map(&figure, &RasterOptions::with_width(5000)).is_err());
    }
}
