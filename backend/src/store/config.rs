//! Explorer configuration file support.
//!
//! Configuration is read from a TOML file (`explorer.toml` by default) and a
//! few environment variables may override the server section.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ErrorContext, StoreError, StoreResult};
use crate::models::YearRange;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "EXPLORER_CONFIG";

/// Explorer configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub data: DataSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

/// Input file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Vegetation cover per spatial unit and year (`shrid2`, `year`, `vcf_mean`)
    pub vegetation_csv: PathBuf,
    /// Location names keyed by spatial unit (`shrid2`, ...)
    pub locations_csv: PathBuf,
    /// Spatial unit centroids (`shrid2`, `longitude`, `latitude`)
    pub coordinates_csv: PathBuf,
    /// Wide park visitor table, spreadsheet or CSV
    pub visitors_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Year slider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_year_min")]
    pub year_min: i32,
    #[serde(default = "default_year_max")]
    pub year_max: i32,
    #[serde(default = "default_year_min")]
    pub default_year: i32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            year_min: default_year_min(),
            year_max: default_year_max(),
            default_year: default_year_min(),
        }
    }
}

impl UiSettings {
    pub fn year_range(&self) -> YearRange {
        YearRange {
            min: self.year_min,
            max: self.year_max,
            default: self.default_year,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_year_min() -> i32 {
    crate::models::DEFAULT_YEAR_MIN
}

fn default_year_max() -> i32 {
    crate::models::DEFAULT_YEAR_MAX
}

impl ExplorerConfig {
    /// Parse configuration from TOML text. Relative data paths are kept as-is.
    pub fn from_toml_str(content: &str) -> StoreResult<Self> {
        let config: ExplorerConfig = toml::from_str(content).map_err(|e| {
            StoreError::configuration_with_context(
                format!("Failed to parse config file: {}", e),
                ErrorContext::new("parse_config"),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// Relative data paths are resolved against the directory holding the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                ErrorContext::new("read_config").with_entity_id(path.display()),
            )
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            config.data.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Uses `EXPLORER_CONFIG` when set, otherwise searches for `explorer.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    pub fn from_default_location() -> StoreResult<Self> {
        if let Ok(explicit) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(explicit);
        }

        let search_paths = [
            PathBuf::from("explorer.toml"),
            PathBuf::from("backend/explorer.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(StoreError::configuration(
            "No explorer.toml found in standard locations",
        ))
    }

    /// Apply `HOST` and `PORT` overrides from the environment.
    pub fn apply_env_overrides(&mut self) -> StoreResult<()> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                StoreError::configuration_with_context(
                    "PORT must be a valid port number",
                    ErrorContext::new("apply_env_overrides").with_entity_id(port),
                )
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> StoreResult<()> {
        let ui = &self.ui;
        if ui.year_min > ui.year_max {
            return Err(StoreError::configuration(format!(
                "ui.year_min ({}) is greater than ui.year_max ({})",
                ui.year_min, ui.year_max
            )));
        }
        if !ui.year_range().contains(ui.default_year) {
            return Err(StoreError::configuration(format!(
                "ui.default_year ({}) is outside {}..={}",
                ui.default_year, ui.year_min, ui.year_max
            )));
        }
        Ok(())
    }
}

impl DataSettings {
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [
            &mut self.vegetation_csv,
            &mut self.locations_csv,
            &mut self.coordinates_csv,
            &mut self.visitors_path,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
