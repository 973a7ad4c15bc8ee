//! CSV readers for the spatial-unit tables and the wide visitor table.

use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;

use crate::models::{ParkColumn, VegetationRecord, WideVisitorTable};
use crate::store::{ErrorContext, StoreError, StoreResult};

/// Spatial-unit key shared by the three tables.
pub const SPATIAL_UNIT_KEY: &str = "shrid2";
pub const YEAR_COLUMN: &str = "year";
pub const VEGETATION_COLUMN: &str = "vcf_mean";
pub const LONGITUDE_COLUMN: &str = "longitude";
pub const LATITUDE_COLUMN: &str = "latitude";

/// Header of the year column in the visitor table (matched case-insensitively).
pub const VISITOR_YEAR_COLUMN: &str = "Year";

fn polars_error(e: PolarsError, context: ErrorContext) -> StoreError {
    StoreError::parse_with_context(e.to_string(), context)
}

/// Parse a CSV file with a header row into a DataFrame.
pub fn read_csv(path: &Path, entity: &str) -> StoreResult<DataFrame> {
    let context = || {
        ErrorContext::new("read_csv")
            .with_entity(entity)
            .with_entity_id(path.display())
    };

    if !path.is_file() {
        return Err(StoreError::io_with_context("file not found", context()));
    }

    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .map_err(|e| polars_error(e, context()))?
        .finish()
        .map_err(|e| polars_error(e, context()))
}

/// Fail with a schema error unless every column in `required` is present.
pub fn require_columns(df: &DataFrame, required: &[&str], entity: &str) -> StoreResult<()> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for name in required {
        if !column_names.iter().any(|c| c == name) {
            return Err(StoreError::schema_with_context(
                format!("column '{}' not found", name),
                ErrorContext::new("require_columns")
                    .with_entity(entity)
                    .with_details(format!("available: {}", column_names.join(", "))),
            ));
        }
    }
    Ok(())
}

/// Inner-join vegetation, location keys and coordinates on the spatial-unit key.
///
/// The result has exactly the columns `shrid2`, `year`, `vcf_mean`, `longitude`
/// and `latitude`, with the key as string, year as Int64 and the measurements as
/// Float64 (CSV inference may have produced integers for any of them).
pub fn join_spatial_units(
    vegetation: DataFrame,
    locations: DataFrame,
    coordinates: DataFrame,
) -> StoreResult<DataFrame> {
    require_columns(
        &vegetation,
        &[SPATIAL_UNIT_KEY, YEAR_COLUMN, VEGETATION_COLUMN],
        "vegetation",
    )?;
    require_columns(&locations, &[SPATIAL_UNIT_KEY], "locations")?;
    require_columns(
        &coordinates,
        &[SPATIAL_UNIT_KEY, LONGITUDE_COLUMN, LATITUDE_COLUMN],
        "coordinates",
    )?;

    let vegetation = vegetation.lazy().select([
        col(SPATIAL_UNIT_KEY).cast(DataType::String),
        col(YEAR_COLUMN).cast(DataType::Int64),
        col(VEGETATION_COLUMN).cast(DataType::Float64),
    ]);
    let locations = locations
        .lazy()
        .select([col(SPATIAL_UNIT_KEY).cast(DataType::String)]);
    let coordinates = coordinates.lazy().select([
        col(SPATIAL_UNIT_KEY).cast(DataType::String),
        col(LONGITUDE_COLUMN).cast(DataType::Float64),
        col(LATITUDE_COLUMN).cast(DataType::Float64),
    ]);

    // Records keep the vegetation file's row order; the duplicate rule relies on it
    let keep_left_order = || {
        let mut args = JoinArgs::new(JoinType::Inner);
        args.maintain_order = MaintainOrderJoin::Left;
        args
    };

    vegetation
        .join(
            locations,
            [col(SPATIAL_UNIT_KEY)],
            [col(SPATIAL_UNIT_KEY)],
            keep_left_order(),
        )
        .join(
            coordinates,
            [col(SPATIAL_UNIT_KEY)],
            [col(SPATIAL_UNIT_KEY)],
            keep_left_order(),
        )
        .collect()
        .map_err(|e| {
            StoreError::join_with_context(
                e.to_string(),
                ErrorContext::new("join_spatial_units").with_entity_id(SPATIAL_UNIT_KEY),
            )
        })
}

/// Outcome of converting the joined frame to records.
#[derive(Debug, Clone, Default)]
pub struct VegetationRows {
    pub records: Vec<VegetationRecord>,
    /// Rows without a measurement or coordinate
    pub incomplete: usize,
    /// Repeated `(spatial unit, year)` pairs after the first
    pub duplicates: usize,
}

/// Convert the joined frame into records, keeping the first row per
/// `(spatial unit, year)`.
pub fn dataframe_to_vegetation(df: &DataFrame) -> StoreResult<VegetationRows> {
    let context = || ErrorContext::new("dataframe_to_vegetation").with_entity("vegetation");

    let ids = df
        .column(SPATIAL_UNIT_KEY)
        .and_then(|c| c.str())
        .map_err(|e| polars_error(e, context()))?;
    let years = df
        .column(YEAR_COLUMN)
        .and_then(|c| c.i64())
        .map_err(|e| polars_error(e, context()))?;
    let values = df
        .column(VEGETATION_COLUMN)
        .and_then(|c| c.f64())
        .map_err(|e| polars_error(e, context()))?;
    let longitudes = df
        .column(LONGITUDE_COLUMN)
        .and_then(|c| c.f64())
        .map_err(|e| polars_error(e, context()))?;
    let latitudes = df
        .column(LATITUDE_COLUMN)
        .and_then(|c| c.f64())
        .map_err(|e| polars_error(e, context()))?;

    let mut rows = VegetationRows::default();
    let mut seen: HashSet<(String, i32)> = HashSet::new();

    for i in 0..df.height() {
        let id = ids.get(i).ok_or_else(|| {
            StoreError::schema_with_context(
                format!("missing {} at row {}", SPATIAL_UNIT_KEY, i),
                context(),
            )
        })?;
        let year = years.get(i).ok_or_else(|| {
            StoreError::schema_with_context(format!("missing {} at row {}", YEAR_COLUMN, i), context())
        })?;
        let year = i32::try_from(year).map_err(|_| {
            StoreError::schema_with_context(format!("year {} out of range at row {}", year, i), context())
        })?;

        let (value, lon, lat) = match (values.get(i), longitudes.get(i), latitudes.get(i)) {
            (Some(v), Some(lon), Some(lat)) if v.is_finite() && lon.is_finite() && lat.is_finite() => {
                (v, lon, lat)
            }
            _ => {
                rows.incomplete += 1;
                continue;
            }
        };

        if !seen.insert((id.to_string(), year)) {
            rows.duplicates += 1;
            continue;
        }

        rows.records.push(VegetationRecord::new(id, year, value, lon, lat));
    }

    Ok(rows)
}

/// Read the wide visitor table from a CSV file.
pub fn parse_wide_visitor_csv(path: &Path) -> StoreResult<WideVisitorTable> {
    let df = read_csv(path, "visitors")?;
    dataframe_to_wide_visitors(&df)
}

/// Split a wide visitor frame into its year column and one column per park.
pub fn dataframe_to_wide_visitors(df: &DataFrame) -> StoreResult<WideVisitorTable> {
    let context = |column: &str| {
        ErrorContext::new("dataframe_to_wide_visitors")
            .with_entity("visitors")
            .with_entity_id(column)
    };

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let year_name = column_names
        .iter()
        .find(|c| c.eq_ignore_ascii_case(VISITOR_YEAR_COLUMN))
        .ok_or_else(|| {
            StoreError::schema_with_context(
                format!("column '{}' not found", VISITOR_YEAR_COLUMN),
                context(VISITOR_YEAR_COLUMN),
            )
        })?;

    let years_column = df
        .column(year_name)
        .and_then(|c| c.cast(&DataType::Int64))
        .map_err(|e| polars_error(e, context(year_name)))?;
    let years_ca = years_column
        .i64()
        .map_err(|e| polars_error(e, context(year_name)))?;

    let mut years = Vec::with_capacity(df.height());
    for (row, year) in years_ca.into_iter().enumerate() {
        let year = year.ok_or_else(|| {
            StoreError::parse_with_context(format!("missing or non-numeric year at row {}", row), context(year_name))
        })?;
        let year = i32::try_from(year).map_err(|_| {
            StoreError::parse_with_context(format!("year {} out of range at row {}", year, row), context(year_name))
        })?;
        years.push(year);
    }

    let mut parks = Vec::new();
    for name in column_names.iter().filter(|c| *c != year_name) {
        let column = df
            .column(name)
            .map_err(|e| polars_error(e, context(name)))?;
        let counts = if column.dtype() == &DataType::String {
            // Quoted counts such as "1,234" are read as text
            let text = column.str().map_err(|e| polars_error(e, context(name)))?;
            let mut counts = Vec::with_capacity(text.len());
            for (row, cell) in text.into_iter().enumerate() {
                let count = match cell {
                    Some(cell) => parse_count_text(cell).map_err(|_| {
                        StoreError::parse_with_context(
                            format!("non-numeric visitor count '{}' at row {}", cell, row),
                            context(name),
                        )
                    })?,
                    None => None,
                };
                counts.push(count);
            }
            counts
        } else {
            let cast = column
                .cast(&DataType::Float64)
                .map_err(|e| polars_error(e, context(name)))?;
            if cast.null_count() > column.null_count() {
                return Err(StoreError::parse_with_context(
                    "non-numeric visitor count",
                    context(name),
                ));
            }
            cast.f64()
                .map_err(|e| polars_error(e, context(name)))?
                .into_iter()
                .collect()
        };
        parks.push(ParkColumn {
            park_name: name.clone(),
            counts,
        });
    }

    let table = WideVisitorTable { years, parks };
    validate_wide_visitors(&table)?;
    Ok(table)
}

/// Visitor count written as text; `Ok(None)` for a blank cell. Thousands
/// separators ("1,234") are accepted.
pub fn parse_count_text(text: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.replace(',', "").parse::<f64>().map(Some)
}

/// Checks shared by both visitor formats: park names are unique and every
/// count is a finite, non-negative number.
pub fn validate_wide_visitors(table: &WideVisitorTable) -> StoreResult<()> {
    let mut seen = HashSet::new();
    for park in &table.parks {
        if !seen.insert(park.park_name.as_str()) {
            return Err(StoreError::schema_with_context(
                format!("duplicate park column '{}'", park.park_name),
                ErrorContext::new("validate_wide_visitors")
                    .with_entity("visitors")
                    .with_entity_id(&park.park_name),
            ));
        }

        let invalid = table
            .years
            .iter()
            .zip(park.counts.iter())
            .find(|(_, count)| matches!(count, Some(c) if !c.is_finite() || *c < 0.0));
        if let Some((year, Some(count))) = invalid {
            return Err(StoreError::parse_with_context(
                format!("invalid visitor count {} for {}", count, year),
                ErrorContext::new("validate_wide_visitors")
                    .with_entity("visitors")
                    .with_entity_id(&park.park_name),
            ));
        }
    }
    Ok(())
}
