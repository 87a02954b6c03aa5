//! Configuration
//!
//! Scoring constants (JSON-loadable, defaults reproduce the standard
//! formula exactly) and dataset locations (environment variables).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Ideal environmental conditions and per-unit penalties for season scoring
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Ideal temperature range in °C (low, high)
    pub ideal_temp_range: (f64, f64),
    /// Ideal relative humidity range in % (low, high)
    pub ideal_humidity_range: (f64, f64),
    /// AQI at which the air-quality term is exactly 100
    pub ideal_aqi_threshold: f64,
    /// Points lost per °C away from the temperature midpoint
    pub temp_penalty: f64,
    /// Points lost per % away from the humidity midpoint
    pub humidity_penalty: f64,
    /// Points lost per AQI unit above the threshold
    pub aqi_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            ideal_temp_range: (18.0, 30.0),
            ideal_humidity_range: (40.0, 70.0),
            ideal_aqi_threshold: 50.0,
            temp_penalty: 5.0,
            humidity_penalty: 3.0,
            aqi_penalty: 2.0,
        }
    }
}

impl ScoringConfig {
    /// Load scoring constants from a JSON file; omitted keys keep defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring config: {:?}", path))?;

        let config: ScoringConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse scoring config JSON: {:?}", path))?;

        if config.ideal_temp_range.0 > config.ideal_temp_range.1 {
            anyhow::bail!("ideal_temp_range low bound exceeds high bound");
        }
        if config.ideal_humidity_range.0 > config.ideal_humidity_range.1 {
            anyhow::bail!("ideal_humidity_range low bound exceeds high bound");
        }

        Ok(config)
    }

    pub fn temp_midpoint(&self) -> f64 {
        (self.ideal_temp_range.0 + self.ideal_temp_range.1) / 2.0
    }

    pub fn humidity_midpoint(&self) -> f64 {
        (self.ideal_humidity_range.0 + self.ideal_humidity_range.1) / 2.0
    }
}

/// Growth outlook thresholds on total deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthThresholds {
    /// Largest non-zero deviation still classified as "Moderate"
    pub moderate_max: f64,
}

impl Default for GrowthThresholds {
    fn default() -> Self {
        GrowthThresholds { moderate_max: 10.0 }
    }
}

/// Locations of the reference datasets and the image folder
#[derive(Debug, Clone, PartialEq)]
pub struct DataPaths {
    pub plants_csv: PathBuf,
    pub flowering_csv: PathBuf,
    pub environment_csv: PathBuf,
    pub image_dir: PathBuf,
}

impl DataPaths {
    pub const DEFAULT_PLANTS: &'static str = "plant_data.csv";
    pub const DEFAULT_FLOWERING: &'static str = "plant_flowering_fruiting.csv";
    pub const DEFAULT_ENVIRONMENT: &'static str = "environment_data.csv";
    pub const DEFAULT_IMAGES: &'static str = "plant_images";

    /// All four locations relative to one directory, default file names
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        DataPaths {
            plants_csv: dir.join(Self::DEFAULT_PLANTS),
            flowering_csv: dir.join(Self::DEFAULT_FLOWERING),
            environment_csv: dir.join(Self::DEFAULT_ENVIRONMENT),
            image_dir: dir.join(Self::DEFAULT_IMAGES),
        }
    }

    /// Resolve from `DATA_DIR` plus per-file overrides
    ///
    /// `PLANT_DATA_CSV`, `FLOWERING_DATA_CSV`, `ENVIRONMENT_DATA_CSV` and
    /// `PLANT_IMAGE_DIR` are taken as given (not joined onto `DATA_DIR`).
    pub fn from_env() -> Self {
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string());
        let mut paths = Self::in_dir(data_dir);

        if let Ok(p) = std::env::var("PLANT_DATA_CSV") {
            paths.plants_csv = PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("FLOWERING_DATA_CSV") {
            paths.flowering_csv = PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("ENVIRONMENT_DATA_CSV") {
            paths.environment_csv = PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("PLANT_IMAGE_DIR") {
            paths.image_dir = PathBuf::from(p);
        }

        paths
    }
}
