//! Static Lookup Tables
//!
//! Ordinal scales, season buckets and leaf diagnosis text. These are
//! configuration data; the functions below only search the tables.

use crate::types::{GrowthRate, LeafColor, Season, SoilType};
use chrono::Month;
use serde::Serialize;

// ============================================================================
// ORDINAL SCALES
// ============================================================================

/// Soil texture ordinal used by the growth comparator
static SOIL_ORDINALS: &[(SoilType, u8)] = &[
    (SoilType::Sandy, 1),
    (SoilType::Clay, 2),
    (SoilType::Loamy, 3),
    (SoilType::Silty, 4),
    (SoilType::Peaty, 5),
];

/// Growth rate ordinal for the sunlight-vs-growth chart
static GROWTH_RATE_ORDINALS: &[(GrowthRate, u8)] = &[
    (GrowthRate::Slow, 1),
    (GrowthRate::Medium, 2),
    (GrowthRate::Fast, 3),
];

pub fn soil_ordinal(soil: SoilType) -> u8 {
    SOIL_ORDINALS
        .iter()
        .find(|(s, _)| *s == soil)
        .map(|(_, ord)| *ord)
        .unwrap_or(0)
}

pub fn growth_rate_ordinal(rate: GrowthRate) -> u8 {
    GROWTH_RATE_ORDINALS
        .iter()
        .find(|(r, _)| *r == rate)
        .map(|(_, ord)| *ord)
        .unwrap_or(0)
}

// ============================================================================
// SEASON BUCKETS
// ============================================================================

static SEASON_MONTHS: &[(Season, [Month; 3])] = &[
    (Season::Winter, [Month::December, Month::January, Month::February]),
    (Season::Spring, [Month::March, Month::April, Month::May]),
    (Season::Summer, [Month::June, Month::July, Month::August]),
    (Season::Fall, [Month::September, Month::October, Month::November]),
];

pub fn season_months(season: Season) -> [Month; 3] {
    SEASON_MONTHS
        .iter()
        .find(|(s, _)| *s == season)
        .map(|(_, months)| *months)
        .unwrap_or([Month::January; 3])
}

// ============================================================================
// LEAF COLOR
// ============================================================================

/// Cause / effect / solution for a reported leaf symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeafDiagnosis {
    pub symptom: LeafColor,
    pub cause: &'static str,
    pub effect: &'static str,
    pub solution: &'static str,
}

static LEAF_DIAGNOSES: &[LeafDiagnosis] = &[
    LeafDiagnosis {
        symptom: LeafColor::Yellow,
        cause: "Poor Nutrient Absorption (Nitrogen, Iron, Magnesium Deficiency)",
        effect: "Weak growth, delayed flowering, reduced fruit production",
        solution: "Add balanced fertilizers and ensure proper soil pH",
    },
    LeafDiagnosis {
        symptom: LeafColor::Brown,
        cause: "Overwatering/Underwatering",
        effect: "Root rot or dehydration causing stress",
        solution: "Adjust watering and check drainage",
    },
    LeafDiagnosis {
        symptom: LeafColor::Drooping,
        cause: "Root Issues (Overwatering, Poor Aeration, Fungal Infections)",
        effect: "Weak stem support, reducing flowering",
        solution: "Improve soil drainage and avoid waterlogging",
    },
    LeafDiagnosis {
        symptom: LeafColor::DarkGreen,
        cause: "Excess Nitrogen",
        effect: "Promotes leafy growth but inhibits flowering",
        solution: "Reduce nitrogen and increase phosphorus & potassium",
    },
    LeafDiagnosis {
        symptom: LeafColor::Purplish,
        cause: "Phosphorus Deficiency",
        effect: "Weak root development, poor fruit set",
        solution: "Use phosphorus-rich fertilizers like bone meal",
    },
];

pub fn leaf_diagnosis(symptom: LeafColor) -> Option<&'static LeafDiagnosis> {
    LEAF_DIAGNOSES.iter().find(|d| d.symptom == symptom)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeafStatusKind {
    Healthy,
    Warning,
}

/// Quick note on the leaf color recorded for a plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeafStatus {
    pub kind: LeafStatusKind,
    pub message: &'static str,
}

static LEAF_STATUS: &[(LeafColor, LeafStatus)] = &[
    (LeafColor::Yellow, LeafStatus {
        kind: LeafStatusKind::Warning,
        message: "Yellow leaves may indicate nutrient deficiency (e.g., nitrogen, iron). Consider adding fertilizers.",
    }),
    (LeafColor::Brown, LeafStatus {
        kind: LeafStatusKind::Warning,
        message: "Brown leaves may indicate overwatering or root rot. Check soil drainage.",
    }),
    (LeafColor::DarkGreen, LeafStatus {
        kind: LeafStatusKind::Healthy,
        message: "Dark green leaves indicate healthy growth. Maintain current care routine.",
    }),
    (LeafColor::LightGreen, LeafStatus {
        kind: LeafStatusKind::Warning,
        message: "Light green leaves may indicate insufficient sunlight or nutrients.",
    }),
];

pub fn leaf_status(color: LeafColor) -> Option<LeafStatus> {
    LEAF_STATUS
        .iter()
        .find(|(c, _)| *c == color)
        .map(|(_, status)| *status)
}

// ============================================================================
// ISSUE KEYWORDS
// ============================================================================

/// Phrases in a free-text report that suggest a growth problem
pub const ISSUE_KEYWORDS: &[&str] = &[
    "not grow",
    "dying",
    "yellow",
    "wilt",
    "dry",
    "falling",
    "poor flowering",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_ordinals_cover_every_soil() {
        let ordinals: Vec<u8> = SoilType::ALL.iter().map(|s| soil_ordinal(*s)).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_growth_rate_ordinals() {
        assert_eq!(growth_rate_ordinal(GrowthRate::Slow), 1);
        assert_eq!(growth_rate_ordinal(GrowthRate::Medium), 2);
        assert_eq!(growth_rate_ordinal(GrowthRate::Fast), 3);
    }

    #[test]
    fn test_season_buckets_partition_the_year() {
        let mut numbers: Vec<u32> = Season::ALL
            .iter()
            .flat_map(|s| season_months(*s))
            .map(|m| m.number_from_month())
            .collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=12).collect::<Vec<u32>>());
        assert_eq!(season_months(Season::Winter)[0], Month::December);
    }

    #[test]
    fn test_five_diagnosed_symptoms() {
        assert_eq!(LEAF_DIAGNOSES.len(), 5);
        assert!(leaf_diagnosis(LeafColor::LightGreen).is_none());
        let purple = leaf_diagnosis(LeafColor::Purplish).unwrap();
        assert_eq!(purple.cause, "Phosphorus Deficiency");
    }

    #[test]
    fn test_leaf_status_notes() {
        assert_eq!(leaf_status(LeafColor::DarkGreen).unwrap().kind, LeafStatusKind::Healthy);
        assert_eq!(leaf_status(LeafColor::Brown).unwrap().kind, LeafStatusKind::Warning);
        assert!(leaf_status(LeafColor::Drooping).is_none());
    }
}
