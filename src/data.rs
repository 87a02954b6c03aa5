//! Data Loading and Management
//!
//! Loads the plant catalog, flowering/fruiting calendar and environmental
//! observations from CSV using Polars, then converts each DataFrame once
//! into typed rows. Header names are normalized here and nowhere else.

use crate::config::DataPaths;
use crate::types::{
    EnvironmentObservation, FloweringRecord, GrowthRate, LeafColor, PlantRecord, SoilType,
    Temperature,
};
use crate::utils::{normalize_header, normalize_name, parse_month_list, parse_season_heights, parse_yes_no};
use anyhow::{Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;
use std::path::Path;

// Normalized header names of the fixed schema
const COL_PLANT_NAME: &str = "plant name";
const COL_SOIL_TYPE: &str = "soil type";
const COL_WATERING: &str = "watering";
const COL_TEMPERATURE: &str = "temperature";
const COL_SUNLIGHT: &str = "sunlight hours";
const COL_GROWTH_RATE: &str = "growth rate";
const COL_HEIGHT: &str = "height (cm)";

const COL_FLOWERING: &str = "flowering";
const COL_FRUITING: &str = "fruiting";
const COL_FLOWERING_MONTHS: &str = "flowering months";
const COL_FRUITING_MONTHS: &str = "fruiting months";
const COL_FLOWERING_SEASON: &str = "flowering season";
const COL_FRUITING_SEASON: &str = "fruiting season";
const COL_SOIL_NUTRIENT: &str = "soil nutrient";
const COL_LEAF_COLOR: &str = "leaf color";
const COL_SEASON_HEIGHT: &str = "height based on season (cm)";

const COL_SEASON: &str = "season";
const COL_ENV_TEMPERATURE: &str = "temperature (°c)";
const COL_HUMIDITY: &str = "humidity (%)";
const COL_AQI: &str = "aqi";

/// Immutable reference data for one process
///
/// Safe to share across requests; nothing here is mutated after load.
#[derive(Debug, Clone, Default)]
pub struct PlantDatabase {
    pub plants: Vec<PlantRecord>,
    pub flowering: Vec<FloweringRecord>,
    pub observations: Vec<EnvironmentObservation>,
    plant_index: FxHashMap<String, usize>,
    flowering_index: FxHashMap<String, usize>,
}

impl PlantDatabase {
    /// Load all three datasets
    pub fn load(paths: &DataPaths) -> Result<Self> {
        tracing::info!("Loading plant datasets...");

        let plants = load_plants(&paths.plants_csv)?;
        let flowering = load_flowering(&paths.flowering_csv)?;
        let observations = load_observations(&paths.environment_csv)?;

        tracing::info!("  Plants: {}", plants.len());
        tracing::info!("  Flowering records: {}", flowering.len());
        tracing::info!("  Environment observations: {}", observations.len());

        Ok(Self::from_records(plants, flowering, observations))
    }

    /// Build a database from already-typed rows
    pub fn from_records(
        plants: Vec<PlantRecord>,
        flowering: Vec<FloweringRecord>,
        observations: Vec<EnvironmentObservation>,
    ) -> Self {
        let plant_index = build_index(plants.iter().map(|p| p.name.as_str()));
        let flowering_index = build_index(flowering.iter().map(|f| f.name.as_str()));

        PlantDatabase {
            plants,
            flowering,
            observations,
            plant_index,
            flowering_index,
        }
    }

    /// Catalog row for an already-normalized key
    pub fn plant_by_key(&self, key: &str) -> Option<&PlantRecord> {
        self.plant_index.get(key).map(|&idx| &self.plants[idx])
    }

    /// Calendar row for an already-normalized key
    pub fn flowering_by_key(&self, key: &str) -> Option<&FloweringRecord> {
        self.flowering_index.get(key).map(|&idx| &self.flowering[idx])
    }
}

/// Key → first row; later duplicates are ignored
fn build_index<'a>(names: impl Iterator<Item = &'a str>) -> FxHashMap<String, usize> {
    let mut index = FxHashMap::default();
    for (idx, name) in names.enumerate() {
        index.entry(normalize_name(name)).or_insert(idx);
    }
    index
}

// ============================================================================
// CSV → DataFrame
// ============================================================================

/// Every column is read as text; numeric columns are cast non-strictly later
fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
        .finish()
        .with_context(|| format!("Failed to load CSV: {:?}", path))
}

/// Normalized header → header as it appears in the file
struct Columns {
    source: String,
    by_key: FxHashMap<String, String>,
}

impl Columns {
    fn of(df: &DataFrame, source: &Path) -> Self {
        let by_key = df
            .get_column_names()
            .into_iter()
            .map(|name| {
                let name = name.to_string();
                (normalize_header(&name), name)
            })
            .collect();

        Columns {
            source: source.display().to_string(),
            by_key,
        }
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.by_key
            .get(key)
            .map(String::as_str)
            .with_context(|| format!("Column '{}' not found in {}", key, self.source))
    }

    fn optional(&self, key: &str) -> Option<&str> {
        let found = self.by_key.get(key).map(String::as_str);
        if found.is_none() {
            tracing::warn!("Column '{}' missing from {}; values treated as absent", key, self.source);
        }
        found
    }
}

/// Trimmed text cells; blanks become None
fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::String)
        .with_context(|| format!("Column '{}' could not be read as text", name))?;

    let values = column
        .str()
        .with_context(|| format!("Column '{}' is not string type", name))?
        .into_iter()
        .map(|v| v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string))
        .collect();

    Ok(values)
}

/// Numeric cells; anything unparseable (or NaN) becomes None, never zero
fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' could not be cast to Float64", name))?;

    let values = column
        .f64()
        .with_context(|| format!("Column '{}' is not Float64", name))?
        .into_iter()
        .map(|v| v.filter(|x| x.is_finite()))
        .collect();

    Ok(values)
}

/// Text cells kept exactly as stored; only blank cells become None
fn literal_text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::String)
        .with_context(|| format!("Column '{}' could not be read as text", name))?;

    let values = column
        .str()
        .with_context(|| format!("Column '{}' is not string type", name))?
        .into_iter()
        .map(|v| v.filter(|s| !s.trim().is_empty()).map(str::to_string))
        .collect();

    Ok(values)
}

fn optional_text(df: &DataFrame, cols: &Columns, key: &str) -> Result<Vec<Option<String>>> {
    match cols.optional(key) {
        Some(name) => text_values(df, name),
        None => Ok(vec![None; df.height()]),
    }
}

fn optional_float(df: &DataFrame, cols: &Columns, key: &str) -> Result<Vec<Option<f64>>> {
    match cols.optional(key) {
        Some(name) => float_values(df, name),
        None => Ok(vec![None; df.height()]),
    }
}

/// Parse a categorical cell, logging values that fall outside the enum
fn categorical<T>(
    raw: Option<&String>,
    parse: impl Fn(&str) -> Option<T>,
    plant: &str,
    column: &str,
) -> Option<T> {
    let raw = raw?;
    let parsed = parse(raw);
    if parsed.is_none() {
        tracing::warn!("{}: unrecognised {} '{}'", plant, column, raw);
    }
    parsed
}

// ============================================================================
// DataFrame → typed rows
// ============================================================================

fn load_plants(path: &Path) -> Result<Vec<PlantRecord>> {
    let df = read_csv(path)?;
    let cols = Columns::of(&df, path);

    let names = text_values(&df, cols.require(COL_PLANT_NAME)?)?;
    let soils = optional_text(&df, &cols, COL_SOIL_TYPE)?;
    let watering = optional_text(&df, &cols, COL_WATERING)?;
    let temperatures = optional_text(&df, &cols, COL_TEMPERATURE)?;
    let sunlight = optional_float(&df, &cols, COL_SUNLIGHT)?;
    let growth = optional_text(&df, &cols, COL_GROWTH_RATE)?;
    let heights = optional_float(&df, &cols, COL_HEIGHT)?;

    let mut plants = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let Some(name) = names[idx].clone() else {
            tracing::warn!("{:?} row {}: missing plant name, skipped", path, idx + 1);
            continue;
        };

        plants.push(PlantRecord {
            soil_type: categorical(soils[idx].as_ref(), SoilType::parse, &name, "soil type"),
            watering: watering[idx].clone(),
            temperature: temperatures[idx].as_deref().and_then(Temperature::parse),
            sunlight_hours: sunlight[idx],
            growth_rate: categorical(growth[idx].as_ref(), GrowthRate::parse, &name, "growth rate"),
            height_cm: heights[idx],
            name,
        });
    }

    Ok(plants)
}

fn load_flowering(path: &Path) -> Result<Vec<FloweringRecord>> {
    let df = read_csv(path)?;
    let cols = Columns::of(&df, path);

    let names = text_values(&df, cols.require(COL_PLANT_NAME)?)?;
    let flowering = optional_text(&df, &cols, COL_FLOWERING)?;
    let fruiting = optional_text(&df, &cols, COL_FRUITING)?;
    let flowering_months = optional_text(&df, &cols, COL_FLOWERING_MONTHS)?;
    let fruiting_months = optional_text(&df, &cols, COL_FRUITING_MONTHS)?;
    let flowering_season = optional_text(&df, &cols, COL_FLOWERING_SEASON)?;
    let fruiting_season = optional_text(&df, &cols, COL_FRUITING_SEASON)?;
    let soil_nutrient = optional_text(&df, &cols, COL_SOIL_NUTRIENT)?;
    let leaf_color = optional_text(&df, &cols, COL_LEAF_COLOR)?;
    let season_height = optional_text(&df, &cols, COL_SEASON_HEIGHT)?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let Some(name) = names[idx].clone() else {
            tracing::warn!("{:?} row {}: missing plant name, skipped", path, idx + 1);
            continue;
        };

        let (fl_months, fl_unknown) = parse_month_list(flowering_months[idx].as_deref().unwrap_or(""));
        let (fr_months, fr_unknown) = parse_month_list(fruiting_months[idx].as_deref().unwrap_or(""));
        for token in fl_unknown.iter().chain(fr_unknown.iter()) {
            tracing::warn!("{}: unknown month '{}' dropped", name, token);
        }

        let (height_by_season, malformed) =
            parse_season_heights(season_height[idx].as_deref().unwrap_or(""));
        for entry in &malformed {
            tracing::warn!("{}: malformed seasonal height '{}' dropped", name, entry);
        }

        records.push(FloweringRecord {
            flowering: flowering[idx].as_deref().is_some_and(parse_yes_no),
            fruiting: fruiting[idx].as_deref().is_some_and(parse_yes_no),
            flowering_months: fl_months,
            fruiting_months: fr_months,
            flowering_season: flowering_season[idx].clone(),
            fruiting_season: fruiting_season[idx].clone(),
            soil_nutrient: soil_nutrient[idx].clone(),
            leaf_symptom: categorical(leaf_color[idx].as_ref(), LeafColor::parse, &name, "leaf color"),
            leaf_color: leaf_color[idx].clone(),
            height_by_season,
            name,
        });
    }

    Ok(records)
}

fn load_observations(path: &Path) -> Result<Vec<EnvironmentObservation>> {
    let df = read_csv(path)?;
    let cols = Columns::of(&df, path);

    let names = text_values(&df, cols.require(COL_PLANT_NAME)?)?;
    // Season labels are grouped literally, so they are not trimmed
    let seasons = literal_text_values(&df, cols.require(COL_SEASON)?)?;
    let temperatures = optional_float(&df, &cols, COL_ENV_TEMPERATURE)?;
    let humidity = optional_float(&df, &cols, COL_HUMIDITY)?;
    let aqi = optional_float(&df, &cols, COL_AQI)?;

    let mut observations = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let (Some(name), Some(season)) = (names[idx].as_deref(), seasons[idx].as_deref()) else {
            tracing::warn!("{:?} row {}: missing plant name or season, skipped", path, idx + 1);
            continue;
        };

        observations.push(EnvironmentObservation::new(
            name,
            season,
            temperatures[idx],
            humidity[idx],
            aqi[idx],
        ));
    }

    Ok(observations)
}
