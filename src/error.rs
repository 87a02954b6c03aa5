//! Typed analysis failures
//!
//! Every core operation returns one of these instead of terminating or
//! defaulting. Load-time failures (missing files, bad headers) stay as
//! `anyhow::Error` and are propagated unchanged by the caller.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which reference dataset a lookup ran against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dataset {
    Plants,
    Flowering,
    Environment,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dataset::Plants => "plant catalog",
            Dataset::Flowering => "flowering/fruiting calendar",
            Dataset::Environment => "environmental observations",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// Plant name absent from a dataset
    #[error("'{name}' not found in the {dataset}")]
    NotFound { dataset: Dataset, name: String },

    /// Zero observation rows matched the plant key
    #[error("no environmental data found for '{plant}'")]
    NoData { plant: String },

    /// A found record lacks a field the analysis needs
    #[error("missing data for '{plant}': {field}")]
    MissingData { plant: String, field: String },

    /// User-supplied value could not be coerced
    #[error("invalid {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },
}

impl AnalysisError {
    pub fn not_found(dataset: Dataset, name: &str) -> Self {
        AnalysisError::NotFound {
            dataset,
            name: name.trim().to_string(),
        }
    }

    pub fn missing(plant: &str, field: impl Into<String>) -> Self {
        AnalysisError::MissingData {
            plant: plant.to_string(),
            field: field.into(),
        }
    }

    pub fn invalid(field: &'static str, value: &str) -> Self {
        AnalysisError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_condition() {
        let err = AnalysisError::not_found(Dataset::Flowering, "  Rose ");
        assert_eq!(err.to_string(), "'Rose' not found in the flowering/fruiting calendar");

        let err = AnalysisError::missing("Rose", "Height (cm)");
        assert_eq!(err.to_string(), "missing data for 'Rose': Height (cm)");

        let err = AnalysisError::invalid("sunlight hours", "lots");
        assert_eq!(err.to_string(), "invalid sunlight hours: 'lots'");
    }
}
