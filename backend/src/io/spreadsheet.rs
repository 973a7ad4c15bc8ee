//! Workbook reader for the wide park visitor table.
//!
//! The first worksheet must have a header row with a `Year` column and one
//! column per park; every following row holds one year.

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use super::csv_parser::{parse_count_text, validate_wide_visitors, VISITOR_YEAR_COLUMN};
use crate::models::{ParkColumn, WideVisitorTable};
use crate::store::{ErrorContext, StoreError, StoreResult};

/// Read the first worksheet of an `.xlsx`, `.xls` or `.ods` workbook.
pub fn parse_wide_visitor_workbook(path: &Path) -> StoreResult<WideVisitorTable> {
    let context = || {
        ErrorContext::new("read_workbook")
            .with_entity("visitors")
            .with_entity_id(path.display())
    };

    if !path.is_file() {
        return Err(StoreError::io_with_context("file not found", context()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| StoreError::parse_with_context(e.to_string(), context()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| StoreError::parse_with_context("workbook has no worksheets", context()))?
        .map_err(|e| StoreError::parse_with_context(e.to_string(), context()))?;

    wide_table_from_rows(range.rows())
}

/// Build the wide table from raw sheet rows, header first.
pub fn wide_table_from_rows<'a, I>(mut rows: I) -> StoreResult<WideVisitorTable>
where
    I: Iterator<Item = &'a [Data]>,
{
    let context = |row: usize, column: &str| {
        ErrorContext::new("wide_table_from_rows")
            .with_entity("visitors")
            .with_entity_id(column)
            .with_details(format!("sheet row {}", row + 1))
    };

    let header = rows.next().ok_or_else(|| {
        StoreError::schema_with_context("sheet is empty", context(0, VISITOR_YEAR_COLUMN))
    })?;
    let headers: Vec<String> = header.iter().map(|c| c.to_string().trim().to_string()).collect();

    let year_index = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(VISITOR_YEAR_COLUMN))
        .ok_or_else(|| {
            StoreError::schema_with_context(
                format!("column '{}' not found", VISITOR_YEAR_COLUMN),
                context(0, VISITOR_YEAR_COLUMN),
            )
        })?;

    let park_indices: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(i, h)| *i != year_index && !h.is_empty())
        .map(|(i, _)| i)
        .collect();

    let mut table = WideVisitorTable {
        years: Vec::new(),
        parks: park_indices
            .iter()
            .map(|&i| ParkColumn {
                park_name: headers[i].clone(),
                counts: Vec::new(),
            })
            .collect(),
    };

    for (offset, row) in rows.enumerate() {
        let row_number = offset + 1;
        if row.iter().all(is_blank) {
            continue;
        }

        let year = row
            .get(year_index)
            .and_then(|cell| numeric_cell(cell).ok().flatten())
            .ok_or_else(|| {
                StoreError::parse_with_context(
                    "missing or non-numeric year",
                    context(row_number, VISITOR_YEAR_COLUMN),
                )
            })?;
        table.years.push(year.round() as i32);

        for (park, &index) in table.parks.iter_mut().zip(park_indices.iter()) {
            let count = match row.get(index) {
                Some(cell) => numeric_cell(cell).map_err(|_| {
                    StoreError::parse_with_context(
                        format!("non-numeric visitor count '{}'", cell),
                        context(row_number, &park.park_name),
                    )
                })?,
                None => None,
            };
            park.counts.push(count);
        }
    }

    validate_wide_visitors(&table)?;
    Ok(table)
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Numeric value of a cell; `Ok(None)` for blanks. Text cells may use
/// thousands separators ("1,234").
fn numeric_cell(cell: &Data) -> Result<Option<f64>, ()> {
    match cell {
        Data::Int(v) => Ok(Some(*v as f64)),
        Data::Float(v) => Ok(Some(*v)),
        Data::Empty => Ok(None),
        Data::String(s) => parse_count_text(s).map_err(|_| ()),
        _ => Err(()),
    }
}
