//! Grid configuration persistence.
//!
//! The grid size lives in a small JSON file (`grid_config.json`) in the data
//! directory. Reads never fail hard: a missing or unparsable file yields the
//! default 180x320 grid, and out-of-range values are clamped, never rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COLS, DEFAULT_ROWS, MAX_COLS, MAX_ROWS, MIN_DIM};

/// Overlay grid dimensions. Rows are bounded to `[1, 180]`, columns to
/// `[1, 320]`; every constructor and mutation clamps into those bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of grid rows
    #[serde(default = "default_rows")]
    pub rows: u32,

    /// Number of grid columns
    #[serde(default = "default_cols")]
    pub cols: u32,
}

fn default_rows() -> u32 {
    DEFAULT_ROWS
}

fn default_cols() -> u32 {
    DEFAULT_COLS
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl GridConfig {
    /// Create a configuration, clamping both dimensions into bounds.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }.clamped()
    }

    /// Copy of this configuration with both dimensions clamped into bounds.
    pub fn clamped(self) -> Self {
        Self {
            rows: self.rows.clamp(MIN_DIM, MAX_ROWS),
            cols: self.cols.clamp(MIN_DIM, MAX_COLS),
        }
    }

    /// Parse a configuration from JSON. Missing fields take the defaults;
    /// out-of-range values are clamped.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.clamped())
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a configuration from a file, falling back to the default grid on
    /// a missing file, a read error, or a parse error.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No grid config at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!(
                        "Loaded grid config from {:?}: {}x{}",
                        path,
                        config.rows,
                        config.cols
                    );
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse grid config {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read grid config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save the configuration to a file, creating parent directories if
    /// needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved grid config to {:?}: {}x{}", path, self.rows, self.cols);
        Ok(())
    }
}

/// Errors that can occur when loading or saving the grid configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing or serialization error
    #[error("Failed to parse grid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error when reading/writing the config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_into_bounds() {
        let config = GridConfig::new(0, 9999);
        assert_eq!(config.rows, 1);
        assert_eq!(config.cols, 320);

        let config = GridConfig::new(500, 0);
        assert_eq!(config.rows, 180);
        assert_eq!(config.cols, 1);
    }

    #[test]
    fn test_from_json_clamps() {
        let config = GridConfig::from_json(r#"{"rows": 400, "cols": 50}"#).unwrap();
        assert_eq!(config.rows, 180);
        assert_eq!(config.cols, 50);
    }

    #[test]
    fn test_from_json_missing_fields_take_defaults() {
        let config = GridConfig::from_json("{}").unwrap();
        assert_eq!(config, GridConfig::default());

        let config = GridConfig::from_json(r#"{"rows": 12}"#).unwrap();
        assert_eq!(config.rows, 12);
        assert_eq!(config.cols, 320);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(GridConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = GridConfig::load(Path::new("/nonexistent/grid_config.json"));
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("gridmark-config-test");
        let path = dir.join("grid_config.json");
        let config = GridConfig::new(90, 160);
        config.save(&path).unwrap();
        assert_eq!(GridConfig::load(&path), config);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
