//! Plant Care Analysis
//!
//! Browsing and simple scoring over static horticultural reference data:
//! a plant catalog, a flowering/fruiting calendar and seasonal environmental
//! observations.
//!
//! - `data`: CSV loading with Polars into an immutable `PlantDatabase`
//! - `lookup`: case/whitespace-insensitive name resolution
//! - `catalog`: list filters, chart points, image lookup
//! - `seasonal`: per-season aggregation and suitability scoring
//! - `growth`: user conditions vs. catalog ideal
//! - `flowering`: flowering/fruiting classification and leaf diagnosis
//!
//! Every analysis is a pure function of the loaded data and the request;
//! nothing is cached or remembered between calls.

pub mod config;
pub mod error;
pub mod types;
pub mod utils;
pub mod data;
pub mod lookup;
pub mod catalog;
pub mod seasonal;
pub mod growth;
pub mod flowering;

// Re-export commonly used types
pub use config::{DataPaths, GrowthThresholds, ScoringConfig};
pub use error::{AnalysisError, AnalysisResult, Dataset};
pub use types::*;
pub use data::PlantDatabase;
pub use lookup::{resolve_flowering, resolve_plant};
pub use catalog::{filter_plants, growth_rate_points, plant_image_path, PlantDetails, PlantFilters};
pub use seasonal::{aggregate_by_season_and_score, score_season, SeasonalAnalysis};
pub use growth::{compare_growth, GrowthComparison, GrowthInput, GrowthOutlook};
pub use flowering::{classify_flowering, FloweringAnalysis, FloweringType};
