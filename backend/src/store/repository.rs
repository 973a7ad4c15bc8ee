//! Read-only access to the joined datasets.
//!
//! The filter layer and the HTTP handlers only ever see the datasets through
//! [`DatasetRepository`], so tests can hand them a small in-memory fixture in
//! place of the files loaded at startup.

use crate::api::DatasetSummary;
use crate::models::{VegetationRecord, VisitorRecord};

/// Read access to the datasets loaded at startup.
pub trait DatasetRepository: Send + Sync {
    /// Every vegetation record, in load order.
    fn vegetation_records(&self) -> &[VegetationRecord];

    /// Every visitor record in long form, park-major.
    fn visitor_records(&self) -> &[VisitorRecord];

    /// Park names in source column order.
    fn park_names(&self) -> &[String];

    /// Distinct years present in the vegetation data, ascending.
    fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.vegetation_records().iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Counts and provenance of the loaded data.
    fn summary(&self) -> DatasetSummary;
}
