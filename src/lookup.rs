//! Plant name resolution
//!
//! Free-text names are trimmed and case-folded, then looked up in the
//! per-dataset index built at load time.

use crate::data::PlantDatabase;
use crate::error::{AnalysisError, AnalysisResult, Dataset};
use crate::types::{FloweringRecord, PlantRecord};
use crate::utils::normalize_name;

/// Resolve a name against the plant catalog
pub fn resolve_plant<'a>(db: &'a PlantDatabase, name: &str) -> AnalysisResult<&'a PlantRecord> {
    db.plant_by_key(&normalize_name(name))
        .ok_or_else(|| AnalysisError::not_found(Dataset::Plants, name))
}

/// Resolve a name against the flowering/fruiting calendar
pub fn resolve_flowering<'a>(
    db: &'a PlantDatabase,
    name: &str,
) -> AnalysisResult<&'a FloweringRecord> {
    db.flowering_by_key(&normalize_name(name))
        .ok_or_else(|| AnalysisError::not_found(Dataset::Flowering, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SoilType;

    fn db() -> PlantDatabase {
        let rose = PlantRecord {
            name: "Rose".to_string(),
            soil_type: Some(SoilType::Loamy),
            watering: Some("Moderate".to_string()),
            temperature: None,
            sunlight_hours: Some(6.0),
            growth_rate: None,
            height_cm: Some(50.0),
        };
        PlantDatabase::from_records(vec![rose], vec![], vec![])
    }

    #[test]
    fn test_resolution_ignores_case_and_whitespace() {
        let db = db();
        let a = resolve_plant(&db, "  Rose ").unwrap();
        let b = resolve_plant(&db, "rose").unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.name, "Rose");
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let db = db();
        let err = resolve_plant(&db, "Tulip").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NotFound { dataset: Dataset::Plants, name: "Tulip".to_string() }
        );

        let err = resolve_flowering(&db, "rose").unwrap_err();
        assert!(matches!(err, AnalysisError::NotFound { dataset: Dataset::Flowering, .. }));
    }
}
