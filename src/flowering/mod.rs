//! Flowering & fruiting analysis
//!
//! - `calendar.rs` - monthly counts, season buckets, peak season
//! - `diagnosis.rs` - problem keyword screening and leaf symptom diagnosis

pub mod calendar;
pub mod diagnosis;

pub use calendar::{peak_season, season_totals, MonthlyCounts, SeasonCount};
pub use diagnosis::{check_condition, detect_growth_issue, ConditionCheck};

use crate::types::{FloweringRecord, Season, SeasonHeight};
use crate::utils::{leaf_status, LeafStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FloweringType {
    FloweringAndFruiting,
    FloweringOnly,
    FruitingOnly,
    Neither,
}

impl FloweringType {
    pub fn from_flags(flowering: bool, fruiting: bool) -> Self {
        match (flowering, fruiting) {
            (true, true) => FloweringType::FloweringAndFruiting,
            (true, false) => FloweringType::FloweringOnly,
            (false, true) => FloweringType::FruitingOnly,
            (false, false) => FloweringType::Neither,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FloweringType::FloweringAndFruiting => "Flowering & Fruiting",
            FloweringType::FloweringOnly => "Flowering Only",
            FloweringType::FruitingOnly => "Fruiting Only",
            FloweringType::Neither => "Neither Flowering nor Fruiting",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FloweringAnalysis {
    pub plant: String,
    pub kind: FloweringType,
    pub flowering_by_month: MonthlyCounts,
    pub fruiting_by_month: MonthlyCounts,
    pub flowering_by_season: Vec<SeasonCount>,
    pub fruiting_by_season: Vec<SeasonCount>,
    pub best_flowering_season: Option<Season>,
    pub best_fruiting_season: Option<Season>,
    pub flowering_season: Option<String>,
    pub fruiting_season: Option<String>,
    pub soil_nutrient: Option<String>,
    pub leaf_color: Option<String>,
    pub leaf_status: Option<LeafStatus>,
    pub height_by_season: Vec<SeasonHeight>,
}

/// Classify a calendar record and find its peak flowering/fruiting seasons
///
/// Months are only counted for a list whose flag is set, so a plant marked
/// as not fruiting never reports a fruiting season.
pub fn classify_flowering(record: &FloweringRecord) -> FloweringAnalysis {
    let kind = FloweringType::from_flags(record.flowering, record.fruiting);

    let flowering_by_month = if record.flowering {
        MonthlyCounts::from_months(&record.flowering_months)
    } else {
        MonthlyCounts::default()
    };
    let fruiting_by_month = if record.fruiting {
        MonthlyCounts::from_months(&record.fruiting_months)
    } else {
        MonthlyCounts::default()
    };

    let flowering_by_season = season_totals(&flowering_by_month);
    let fruiting_by_season = season_totals(&fruiting_by_month);

    FloweringAnalysis {
        plant: record.name.clone(),
        kind,
        best_flowering_season: peak_season(&flowering_by_season),
        best_fruiting_season: peak_season(&fruiting_by_season),
        flowering_by_month,
        fruiting_by_month,
        flowering_by_season,
        fruiting_by_season,
        flowering_season: record.flowering_season.clone(),
        fruiting_season: record.fruiting_season.clone().filter(|_| record.fruiting),
        soil_nutrient: record.soil_nutrient.clone(),
        leaf_color: record.leaf_color.clone(),
        leaf_status: record.leaf_symptom.and_then(leaf_status),
        height_by_season: record.height_by_season.clone(),
    }
}
