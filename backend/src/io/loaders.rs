use chrono::Utc;
use log::{info, warn};
use std::fs;
use std::path::Path;

use super::{csv_parser, spreadsheet};
use crate::models::{VegetationRecord, WideVisitorTable};
use crate::store::{calculate_checksum, DataSettings, Datasets, ErrorContext, StoreError, StoreResult};

/// Format of the visitor table file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitorSourceType {
    Workbook,
    Csv,
}

impl VisitorSourceType {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                StoreError::parse_with_context(
                    "file has no extension",
                    ErrorContext::new("detect_visitor_format").with_entity_id(path.display()),
                )
            })?;

        match extension.to_lowercase().as_str() {
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(Self::Workbook),
            "csv" => Ok(Self::Csv),
            other => Err(StoreError::parse_with_context(
                format!("unsupported file format: {}", other),
                ErrorContext::new("detect_visitor_format").with_entity_id(path.display()),
            )),
        }
    }
}

/// Loads and joins every input the explorer needs.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load all four inputs, join the spatial tables and reshape the visitor
    /// table. Any failure aborts the whole load.
    pub fn load(settings: &DataSettings) -> StoreResult<Datasets> {
        let vegetation = Self::load_vegetation(
            &settings.vegetation_csv,
            &settings.locations_csv,
            &settings.coordinates_csv,
        )?;

        let wide = Self::load_visitors(&settings.visitors_path)?;
        let parks = wide.park_names();
        let visitors = wide.into_long();

        let checksum = Self::fingerprint(&[
            settings.vegetation_csv.as_path(),
            settings.locations_csv.as_path(),
            settings.coordinates_csv.as_path(),
            settings.visitors_path.as_path(),
        ])?;

        info!(
            "Loaded {} vegetation records and {} visitor records for {} parks",
            vegetation.len(),
            visitors.len(),
            parks.len()
        );

        Ok(Datasets {
            vegetation,
            visitors,
            parks,
            checksum,
            loaded_at: Utc::now(),
        })
    }

    /// Read the three spatial-unit tables and inner-join them on `shrid2`.
    pub fn load_vegetation(
        vegetation_csv: &Path,
        locations_csv: &Path,
        coordinates_csv: &Path,
    ) -> StoreResult<Vec<VegetationRecord>> {
        let vegetation = csv_parser::read_csv(vegetation_csv, "vegetation")?;
        let locations = csv_parser::read_csv(locations_csv, "locations")?;
        let coordinates = csv_parser::read_csv(coordinates_csv, "coordinates")?;

        let joined = csv_parser::join_spatial_units(vegetation, locations, coordinates)?;
        let rows = csv_parser::dataframe_to_vegetation(&joined)?;

        if rows.incomplete > 0 {
            warn!(
                "Dropped {} vegetation rows without a measurement or coordinates",
                rows.incomplete
            );
        }
        if rows.duplicates > 0 {
            warn!(
                "Dropped {} duplicate (spatial unit, year) rows after join",
                rows.duplicates
            );
        }

        if rows.records.is_empty() {
            return Err(StoreError::join_with_context(
                "join produced no vegetation records",
                ErrorContext::new("load_vegetation")
                    .with_entity_id(csv_parser::SPATIAL_UNIT_KEY)
                    .with_details(format!(
                        "{} rows joined, {} incomplete",
                        joined.height(),
                        rows.incomplete
                    )),
            ));
        }

        Ok(rows.records)
    }

    /// Read the wide visitor table (auto-detects workbook or CSV).
    pub fn load_visitors(path: &Path) -> StoreResult<WideVisitorTable> {
        match VisitorSourceType::from_path(path)? {
            VisitorSourceType::Workbook => spreadsheet::parse_wide_visitor_workbook(path),
            VisitorSourceType::Csv => csv_parser::parse_wide_visitor_csv(path),
        }
    }

    fn fingerprint(paths: &[&Path]) -> StoreResult<String> {
        let mut contents = Vec::with_capacity(paths.len());
        for path in paths {
            let bytes = fs::read(path).map_err(|e| {
                StoreError::io_with_context(
                    e.to_string(),
                    ErrorContext::new("fingerprint").with_entity_id(path.display()),
                )
            })?;
            contents.push(bytes);
        }
        Ok(calculate_checksum(contents.iter().map(|b| b.as_slice())))
    }
}
