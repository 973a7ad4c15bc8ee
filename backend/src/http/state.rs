//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::YearRange;
use crate::store::DatasetRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Datasets loaded at startup
    pub repository: Arc<dyn DatasetRepository>,
    /// Year slider bounds; requests outside them are rejected
    pub years: YearRange,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self {
            repository,
            years: YearRange::default(),
        }
    }

    pub fn with_years(mut self, years: YearRange) -> Self {
        self.years = years;
        self
    }
}
