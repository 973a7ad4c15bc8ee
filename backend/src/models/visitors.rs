//! National park visitor counts in long form.

use serde::{Deserialize, Serialize};

/// Visitors recorded for one park in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub year: i32,
    pub park_name: String,
    pub visitor_count: u64,
}

impl VisitorRecord {
    pub fn new(year: i32, park_name: impl Into<String>, visitor_count: u64) -> Self {
        Self {
            year,
            park_name: park_name.into(),
            visitor_count,
        }
    }
}

/// A park's visitor column before reshaping: one optional count per year row.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkColumn {
    pub park_name: String,
    pub counts: Vec<Option<f64>>,
}

/// Visitor table as stored in the source sheet: a `Year` column and one column
/// per park.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WideVisitorTable {
    pub years: Vec<i32>,
    pub parks: Vec<ParkColumn>,
}

impl WideVisitorTable {
    /// Park names in column order.
    pub fn park_names(&self) -> Vec<String> {
        self.parks.iter().map(|p| p.park_name.clone()).collect()
    }

    /// Reshape into long form, park-major: every year of the first park column,
    /// then every year of the next one. Empty cells produce no record and counts
    /// are rounded to whole visitors. The readers reject negative counts before
    /// the table gets here.
    pub fn into_long(self) -> Vec<VisitorRecord> {
        let mut records = Vec::with_capacity(self.years.len() * self.parks.len());
        for park in self.parks {
            for (year, count) in self.years.iter().zip(park.counts.iter()) {
                if let Some(count) = count {
                    records.push(VisitorRecord {
                        year: *year,
                        park_name: park.park_name.clone(),
                        visitor_count: count.round() as u64,
                    });
                }
            }
        }
        records
    }
}
