//! Growth Recommendations
//!
//! One recommendation per compared field. Numeric fields say which way to
//! move; soil type is categorical so it either matches or names the target.

use crate::types::SoilType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NumericAdvice {
    Increase { target: f64 },
    Decrease { target: f64 },
    Optimal,
}

impl NumericAdvice {
    pub fn compare(user: f64, ideal: f64) -> Self {
        if user < ideal {
            NumericAdvice::Increase { target: ideal }
        } else if user > ideal {
            NumericAdvice::Decrease { target: ideal }
        } else {
            NumericAdvice::Optimal
        }
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, NumericAdvice::Optimal)
    }

    pub fn sunlight_message(&self) -> String {
        match self {
            NumericAdvice::Increase { target } => {
                format!("Increase Sunlight: Your plant needs at least {} hours/day.", target)
            }
            NumericAdvice::Decrease { target } => {
                format!("Too Much Sunlight: Reduce to {} hours/day for best growth.", target)
            }
            NumericAdvice::Optimal => "Sunlight Level is Perfect!".to_string(),
        }
    }

    pub fn height_message(&self) -> String {
        match self {
            NumericAdvice::Increase { target } => {
                format!("Increase Plant Height: Your plant should ideally be {} cm.", target)
            }
            NumericAdvice::Decrease { target } => {
                format!("Your plant is taller than usual! Normal height: {} cm.", target)
            }
            NumericAdvice::Optimal => "Your plant's height is perfect!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum SoilAdvice {
    MatchesIdeal,
    ChangeTo(SoilType),
}

impl SoilAdvice {
    pub fn compare(user: SoilType, ideal: SoilType) -> Self {
        if user == ideal {
            SoilAdvice::MatchesIdeal
        } else {
            SoilAdvice::ChangeTo(ideal)
        }
    }

    pub fn message(&self) -> String {
        match self {
            SoilAdvice::MatchesIdeal => "Soil type matches the ideal.".to_string(),
            SoilAdvice::ChangeTo(ideal) => {
                format!("Change Soil Type: Your plant prefers {} soil.", ideal)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendations {
    pub sunlight: NumericAdvice,
    pub soil: SoilAdvice,
    pub height: NumericAdvice,
}

impl Recommendations {
    /// Display lines in field order: sunlight, soil, height
    pub fn messages(&self) -> Vec<String> {
        vec![
            self.sunlight.sunlight_message(),
            self.soil.message(),
            self.height.height_message(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_direction() {
        assert_eq!(NumericAdvice::compare(4.0, 6.0), NumericAdvice::Increase { target: 6.0 });
        assert_eq!(NumericAdvice::compare(8.0, 6.0), NumericAdvice::Decrease { target: 6.0 });
        assert!(NumericAdvice::compare(6.0, 6.0).is_optimal());
    }

    #[test]
    fn test_messages() {
        let advice = NumericAdvice::Increase { target: 6.0 };
        assert_eq!(advice.sunlight_message(), "Increase Sunlight: Your plant needs at least 6 hours/day.");
        let advice = NumericAdvice::Decrease { target: 50.0 };
        assert_eq!(advice.height_message(), "Your plant is taller than usual! Normal height: 50 cm.");
        assert_eq!(
            SoilAdvice::compare(SoilType::Clay, SoilType::Loamy).message(),
            "Change Soil Type: Your plant prefers Loamy soil."
        );
    }
}
