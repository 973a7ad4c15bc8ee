//! Process-wide datasets and their configuration.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / filter layer                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │  &dyn DatasetRepository
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  InMemoryRepository (read-only after construction)      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │  Datasets
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  io::DatasetLoader (runs once at startup)               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global instance: the binary loads the datasets, wraps them in an
//! `Arc<dyn DatasetRepository>` and hands that to the router state.

pub mod checksum;
pub mod config;
pub mod error;
pub mod memory;
pub mod repository;

pub use checksum::calculate_checksum;
pub use config::{DataSettings, ExplorerConfig, ServerSettings, UiSettings, CONFIG_ENV_VAR};
pub use error::{ErrorContext, StoreError, StoreResult};
pub use memory::{Datasets, InMemoryRepository};
pub use repository::DatasetRepository;
