//! In-memory dataset repository.

use chrono::{DateTime, Utc};

use super::repository::DatasetRepository;
use crate::api::DatasetSummary;
use crate::models::{VegetationRecord, VisitorRecord};

/// Joined datasets as produced by the loader.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub vegetation: Vec<VegetationRecord>,
    pub visitors: Vec<VisitorRecord>,
    pub parks: Vec<String>,
    /// SHA-256 over the input files, hex encoded
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

impl Datasets {
    /// Build datasets from records already in memory. Park order follows the
    /// first appearance of each park in `visitors`.
    pub fn from_records(vegetation: Vec<VegetationRecord>, visitors: Vec<VisitorRecord>) -> Self {
        let mut parks: Vec<String> = Vec::new();
        for record in &visitors {
            if !parks.iter().any(|p| p == &record.park_name) {
                parks.push(record.park_name.clone());
            }
        }
        Self {
            vegetation,
            visitors,
            parks,
            checksum: String::new(),
            loaded_at: Utc::now(),
        }
    }
}

/// Repository over datasets held in process memory.
///
/// Construct it once and share it behind an `Arc`; nothing mutates it after
/// construction.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    datasets: Datasets,
}

impl InMemoryRepository {
    pub fn new(datasets: Datasets) -> Self {
        Self { datasets }
    }

    /// Convenience constructor for fixtures.
    pub fn from_records(vegetation: Vec<VegetationRecord>, visitors: Vec<VisitorRecord>) -> Self {
        Self::new(Datasets::from_records(vegetation, visitors))
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }
}

impl DatasetRepository for InMemoryRepository {
    fn vegetation_records(&self) -> &[VegetationRecord] {
        &self.datasets.vegetation
    }

    fn visitor_records(&self) -> &[VisitorRecord] {
        &self.datasets.visitors
    }

    fn park_names(&self) -> &[String] {
        &self.datasets.parks
    }

    fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            vegetation_records: self.datasets.vegetation.len(),
            visitor_records: self.datasets.visitors.len(),
            parks: self.datasets.parks.len(),
            years: self.available_years(),
            checksum: self.datasets.checksum.clone(),
            loaded_at: self.datasets.loaded_at,
        }
    }
}
