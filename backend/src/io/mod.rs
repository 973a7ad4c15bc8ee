//! Startup loading of the input files.

pub mod csv_parser;
pub mod loaders;
pub mod spreadsheet;


pub use loaders::{DatasetLoader, VisitorSourceType};
