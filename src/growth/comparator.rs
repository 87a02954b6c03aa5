//! Growth Condition Comparator
//!
//! Compares the sunlight, soil type and height a user reports against a
//! plant's catalog values and classifies the growth outlook from the total
//! absolute deviation.
//!
//! Soil types are compared through their fixed ordinal (Sandy=1 … Peaty=5).

use super::advice::{NumericAdvice, Recommendations, SoilAdvice};
use crate::config::GrowthThresholds;
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{PlantRecord, SoilType};
use crate::utils::soil_ordinal;
use serde::Serialize;

pub const FIELD_SUNLIGHT: &str = "Sunlight Hours";
pub const FIELD_SOIL: &str = "Soil Type";
pub const FIELD_HEIGHT: &str = "Height (cm)";

/// Growing conditions reported by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthInput {
    pub sunlight_hours: f64,
    pub soil_type: SoilType,
    pub height_cm: f64,
}

impl GrowthInput {
    /// Coerce raw form values; anything that does not parse is `InvalidInput`
    pub fn parse(sunlight_hours: &str, soil_type: &str, height_cm: &str) -> AnalysisResult<Self> {
        let sunlight_hours = parse_number("sunlight hours", sunlight_hours)?;
        let soil_type = SoilType::parse(soil_type)
            .ok_or_else(|| AnalysisError::invalid("soil type", soil_type))?;
        let height_cm = parse_number("height", height_cm)?;

        Ok(GrowthInput { sunlight_hours, soil_type, height_cm })
    }
}

fn parse_number(field: &'static str, raw: &str) -> AnalysisResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AnalysisError::invalid(field, raw))
}

/// The three catalog values the comparison needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealConditions {
    pub sunlight_hours: f64,
    pub soil_type: SoilType,
    pub height_cm: f64,
}

impl IdealConditions {
    /// Extract from a catalog record; any absent field is `MissingData`
    pub fn from_record(plant: &PlantRecord) -> AnalysisResult<Self> {
        Ok(IdealConditions {
            sunlight_hours: plant
                .sunlight_hours
                .ok_or_else(|| AnalysisError::missing(&plant.name, FIELD_SUNLIGHT))?,
            soil_type: plant
                .soil_type
                .ok_or_else(|| AnalysisError::missing(&plant.name, FIELD_SOIL))?,
            height_cm: plant
                .height_cm
                .ok_or_else(|| AnalysisError::missing(&plant.name, FIELD_HEIGHT))?,
        })
    }
}

/// Growth outlook from total deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrowthOutlook {
    /// Exact match on every field
    Fast,
    /// Total deviation within the moderate threshold
    Moderate,
    Slow,
}

impl GrowthOutlook {
    pub fn classify(total_deviation: f64, thresholds: &GrowthThresholds) -> Self {
        if total_deviation == 0.0 {
            GrowthOutlook::Fast
        } else if total_deviation <= thresholds.moderate_max {
            GrowthOutlook::Moderate
        } else {
            GrowthOutlook::Slow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrowthOutlook::Fast => "Fast",
            GrowthOutlook::Moderate => "Moderate",
            GrowthOutlook::Slow => "Slow",
        }
    }
}

/// Signed per-field differences, user minus ideal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDeviations {
    pub sunlight_hours: f64,
    /// Difference of soil ordinals
    pub soil_type: f64,
    pub height_cm: f64,
}

impl FieldDeviations {
    pub fn total(&self) -> f64 {
        self.sunlight_hours.abs() + self.soil_type.abs() + self.height_cm.abs()
    }
}

/// One bar pair of the user-vs-ideal chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonBar {
    pub factor: &'static str,
    pub user: f64,
    pub ideal: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthComparison {
    pub plant: String,
    pub ideal: IdealConditions,
    pub input: GrowthInput,
    pub deviations: FieldDeviations,
    pub total_deviation: f64,
    pub outlook: GrowthOutlook,
    pub recommendations: Recommendations,
    pub chart: Vec<ComparisonBar>,
}

/// Compare with the standard thresholds
pub fn compare_growth(ideal: &PlantRecord, input: &GrowthInput) -> AnalysisResult<GrowthComparison> {
    compare_growth_with(ideal, input, &GrowthThresholds::default())
}

pub fn compare_growth_with(
    plant: &PlantRecord,
    input: &GrowthInput,
    thresholds: &GrowthThresholds,
) -> AnalysisResult<GrowthComparison> {
    let ideal = IdealConditions::from_record(plant)?;

    let user_soil = f64::from(soil_ordinal(input.soil_type));
    let ideal_soil = f64::from(soil_ordinal(ideal.soil_type));

    let deviations = FieldDeviations {
        sunlight_hours: input.sunlight_hours - ideal.sunlight_hours,
        soil_type: user_soil - ideal_soil,
        height_cm: input.height_cm - ideal.height_cm,
    };
    let total_deviation = deviations.total();
    let outlook = GrowthOutlook::classify(total_deviation, thresholds);

    tracing::debug!(
        "{}: deviations sunlight={} soil={} height={} total={} -> {}",
        plant.name,
        deviations.sunlight_hours,
        deviations.soil_type,
        deviations.height_cm,
        total_deviation,
        outlook.label()
    );

    let recommendations = Recommendations {
        sunlight: NumericAdvice::compare(input.sunlight_hours, ideal.sunlight_hours),
        soil: SoilAdvice::compare(input.soil_type, ideal.soil_type),
        height: NumericAdvice::compare(input.height_cm, ideal.height_cm),
    };

    let chart = vec![
        ComparisonBar { factor: "Sunlight (Hours)", user: input.sunlight_hours, ideal: ideal.sunlight_hours },
        ComparisonBar { factor: "Soil Type", user: user_soil, ideal: ideal_soil },
        ComparisonBar { factor: "Height (cm)", user: input.height_cm, ideal: ideal.height_cm },
    ];

    Ok(GrowthComparison {
        plant: plant.name.clone(),
        ideal,
        input: *input,
        deviations,
        total_deviation,
        outlook,
        recommendations,
        chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rose() -> PlantRecord {
        PlantRecord {
            name: "Rose".to_string(),
            soil_type: Some(SoilType::Loamy),
            watering: None,
            temperature: None,
            sunlight_hours: Some(6.0),
            growth_rate: None,
            height_cm: Some(50.0),
        }
    }

    fn input(sun: f64, soil: SoilType, height: f64) -> GrowthInput {
        GrowthInput { sunlight_hours: sun, soil_type: soil, height_cm: height }
    }

    #[test]
    fn test_exact_match_is_fast_and_optimal() {
        let result = compare_growth(&rose(), &input(6.0, SoilType::Loamy, 50.0)).unwrap();
        assert_eq!(result.total_deviation, 0.0);
        assert_eq!(result.outlook, GrowthOutlook::Fast);
        assert_eq!(result.recommendations.sunlight, NumericAdvice::Optimal);
        assert_eq!(result.recommendations.soil, SoilAdvice::MatchesIdeal);
        assert_eq!(result.recommendations.height, NumericAdvice::Optimal);
    }

    #[test]
    fn test_threshold_boundaries() {
        let thresholds = GrowthThresholds::default();
        assert_eq!(GrowthOutlook::classify(0.0, &thresholds), GrowthOutlook::Fast);
        assert_eq!(GrowthOutlook::classify(10.0, &thresholds), GrowthOutlook::Moderate);
        assert_eq!(GrowthOutlook::classify(11.0, &thresholds), GrowthOutlook::Slow);

        // 2 + |Sandy(1) - Loamy(3)| + 6 = 10
        let result = compare_growth(&rose(), &input(8.0, SoilType::Sandy, 44.0)).unwrap();
        assert_eq!(result.total_deviation, 10.0);
        assert_eq!(result.outlook, GrowthOutlook::Moderate);

        let result = compare_growth(&rose(), &input(8.0, SoilType::Sandy, 43.0)).unwrap();
        assert_eq!(result.total_deviation, 11.0);
        assert_eq!(result.outlook, GrowthOutlook::Slow);
    }

    #[test]
    fn test_signed_deviations_and_advice() {
        let result = compare_growth(&rose(), &input(4.0, SoilType::Peaty, 70.0)).unwrap();
        assert_eq!(result.deviations.sunlight_hours, -2.0);
        assert_eq!(result.deviations.soil_type, 2.0);
        assert_eq!(result.deviations.height_cm, 20.0);
        assert_eq!(result.recommendations.sunlight, NumericAdvice::Increase { target: 6.0 });
        assert_eq!(result.recommendations.soil, SoilAdvice::ChangeTo(SoilType::Loamy));
        assert_eq!(result.recommendations.height, NumericAdvice::Decrease { target: 50.0 });
        assert_eq!(result.chart[1], ComparisonBar { factor: "Soil Type", user: 5.0, ideal: 3.0 });
    }

    #[test]
    fn test_missing_ideal_field_is_surfaced() {
        let mut plant = rose();
        plant.height_cm = None;
        let err = compare_growth(&plant, &input(6.0, SoilType::Loamy, 50.0)).unwrap_err();
        assert_eq!(err, AnalysisError::missing("Rose", FIELD_HEIGHT));
    }

    #[test]
    fn test_input_parsing() {
        let parsed = GrowthInput::parse(" 6 ", "loamy", "50.5").unwrap();
        assert_eq!(parsed, input(6.0, SoilType::Loamy, 50.5));

        let err = GrowthInput::parse("six", "Loamy", "50").unwrap_err();
        assert_eq!(err, AnalysisError::invalid("sunlight hours", "six"));
        assert!(GrowthInput::parse("6", "Gravel", "50").is_err());
        assert!(GrowthInput::parse("6", "Loamy", "NaN").is_err());
    }
}
