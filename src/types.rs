//! Reference data types
//!
//! Typed rows produced once by the dataset loader. Categorical columns are
//! parsed here so the analysis code never touches raw strings again.

use crate::utils::normalize_name;
use chrono::Month;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

// ============================================================================
// Categorical values
// ============================================================================

/// Soil texture class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SoilType {
    Sandy,
    Clay,
    Loamy,
    Silty,
    Peaty,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Sandy,
        SoilType::Clay,
        SoilType::Loamy,
        SoilType::Silty,
        SoilType::Peaty,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "sandy" => Some(SoilType::Sandy),
            "clay" => Some(SoilType::Clay),
            "loamy" => Some(SoilType::Loamy),
            "silty" => Some(SoilType::Silty),
            "peaty" => Some(SoilType::Peaty),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Loamy => "Loamy",
            SoilType::Silty => "Silty",
            SoilType::Peaty => "Peaty",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrowthRate {
    Slow,
    Medium,
    Fast,
}

impl GrowthRate {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "slow" => Some(GrowthRate::Slow),
            "medium" => Some(GrowthRate::Medium),
            "fast" => Some(GrowthRate::Fast),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrowthRate::Slow => "Slow",
            GrowthRate::Medium => "Medium",
            GrowthRate::Fast => "Fast",
        }
    }
}

/// Calendar season bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Fixed bucket order used for occurrence counts and tie-breaks
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "winter" => Some(Season::Winter),
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Leaf color, either recorded in the calendar dataset or reported by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeafColor {
    Yellow,
    Brown,
    Drooping,
    DarkGreen,
    LightGreen,
    Purplish,
}

impl LeafColor {
    /// Accepts "Dark Green", "dark_green", "dark-green", "DarkGreen"
    pub fn parse(raw: &str) -> Option<Self> {
        let key: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "yellow" => Some(LeafColor::Yellow),
            "brown" => Some(LeafColor::Brown),
            "drooping" => Some(LeafColor::Drooping),
            "darkgreen" => Some(LeafColor::DarkGreen),
            "lightgreen" => Some(LeafColor::LightGreen),
            "purplish" | "purple" => Some(LeafColor::Purplish),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeafColor::Yellow => "Yellow",
            LeafColor::Brown => "Brown",
            LeafColor::Drooping => "Drooping",
            LeafColor::DarkGreen => "Dark Green",
            LeafColor::LightGreen => "Light Green",
            LeafColor::Purplish => "Purplish",
        }
    }
}

/// Preferred temperature as recorded in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Temperature {
    Range { low_c: f64, high_c: f64 },
    Text(String),
}

impl Temperature {
    /// Parse "18-24", "18 - 24°C", "-5-10 °C"; anything else is kept as text
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let numeric = trimmed
            .trim_end_matches(|c: char| !c.is_ascii_digit())
            .trim();

        // Skip index 0 so a leading minus sign is not taken as the separator
        let range = numeric
            .get(1..)
            .and_then(|rest| rest.find('-'))
            .map(|i| numeric.split_at(i + 1))
            .and_then(|(low, high)| {
                let low = low.trim().parse::<f64>().ok()?;
                let high = high[1..].trim().parse::<f64>().ok()?;
                Some((low, high))
            });

        Some(match range {
            Some((low_c, high_c)) => Temperature::Range { low_c, high_c },
            None => Temperature::Text(trimmed.to_string()),
        })
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Range { low_c, high_c } => write!(f, "{}-{}°C", low_c, high_c),
            Temperature::Text(text) => f.write_str(text),
        }
    }
}

// ============================================================================
// Dataset rows
// ============================================================================

/// Plant catalog row
#[derive(Debug, Clone, Serialize)]
pub struct PlantRecord {
    pub name: String,
    pub soil_type: Option<SoilType>,
    pub watering: Option<String>,
    pub temperature: Option<Temperature>,
    pub sunlight_hours: Option<f64>,
    pub growth_rate: Option<GrowthRate>,
    pub height_cm: Option<f64>,
}

/// Height range observed in one season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonHeight {
    pub season: String,
    pub min_cm: u32,
    pub max_cm: u32,
}

/// Flowering/fruiting calendar row
#[derive(Debug, Clone, Serialize)]
pub struct FloweringRecord {
    pub name: String,
    pub flowering: bool,
    pub fruiting: bool,
    pub flowering_months: SmallVec<[Month; 12]>,
    pub fruiting_months: SmallVec<[Month; 12]>,
    pub flowering_season: Option<String>,
    pub fruiting_season: Option<String>,
    pub soil_nutrient: Option<String>,
    /// Leaf color as recorded, shown even when it is not a known symptom
    pub leaf_color: Option<String>,
    pub leaf_symptom: Option<LeafColor>,
    pub height_by_season: Vec<SeasonHeight>,
}

/// One environmental reading; many per plant and season
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentObservation {
    pub name: String,
    /// Normalized name, computed once at construction
    #[serde(skip)]
    pub key: String,
    /// Literal label as stored; grouping never reinterprets it
    pub season: String,
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub aqi: Option<f64>,
}

impl EnvironmentObservation {
    pub fn new(
        name: &str,
        season: &str,
        temperature_c: Option<f64>,
        humidity_pct: Option<f64>,
        aqi: Option<f64>,
    ) -> Self {
        EnvironmentObservation {
            name: name.to_string(),
            key: normalize_name(name),
            season: season.to_string(),
            temperature_c,
            humidity_pct,
            aqi,
        }
    }
}
