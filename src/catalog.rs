//! Catalog browsing
//!
//! Filtering for the plant list, distinct values for the filter pickers,
//! growth chart points, and image lookup by file-name convention.

use crate::types::{PlantRecord, SoilType, Temperature};
use crate::utils::{growth_rate_ordinal, image_file_stem};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Active list filters; empty fields do not filter
#[derive(Debug, Clone, Default)]
pub struct PlantFilters {
    /// Case-insensitive substring of the plant name
    pub search: Option<String>,
    /// Keep plants whose soil type is any of these
    pub soil_types: Vec<SoilType>,
    /// Keep plants whose watering category is any of these (case-insensitive)
    pub watering: Vec<String>,
}

impl PlantFilters {
    pub fn matches(&self, plant: &PlantRecord) -> bool {
        if let Some(query) = self.search.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            if !plant.name.to_lowercase().contains(&query.to_lowercase()) {
                return false;
            }
        }

        if !self.soil_types.is_empty()
            && !plant.soil_type.is_some_and(|s| self.soil_types.contains(&s))
        {
            return false;
        }

        if !self.watering.is_empty() {
            let Some(watering) = plant.watering.as_deref() else {
                return false;
            };
            if !self.watering.iter().any(|w| w.trim().eq_ignore_ascii_case(watering.trim())) {
                return false;
            }
        }

        true
    }
}

/// Plants passing every active filter, in catalog order
pub fn filter_plants<'a>(plants: &'a [PlantRecord], filters: &PlantFilters) -> Vec<&'a PlantRecord> {
    plants.iter().filter(|p| filters.matches(p)).collect()
}

/// Soil types present in the catalog, first appearance order
pub fn distinct_soil_types(plants: &[PlantRecord]) -> Vec<SoilType> {
    let mut seen = Vec::new();
    for soil in plants.iter().filter_map(|p| p.soil_type) {
        if !seen.contains(&soil) {
            seen.push(soil);
        }
    }
    seen
}

/// Watering categories present in the catalog, first appearance order
pub fn distinct_watering(plants: &[PlantRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for watering in plants.iter().filter_map(|p| p.watering.as_deref()) {
        if !seen.iter().any(|w| w == watering) {
            seen.push(watering.to_string());
        }
    }
    seen
}

/// One point of the sunlight-vs-growth chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub name: String,
    pub sunlight_hours: f64,
    /// 1 = Slow, 2 = Medium, 3 = Fast
    pub growth_ordinal: u8,
}

/// Chart points; plants lacking sunlight hours or growth rate are left out
pub fn growth_rate_points(plants: &[PlantRecord]) -> Vec<GrowthPoint> {
    plants
        .iter()
        .filter_map(|p| {
            Some(GrowthPoint {
                name: p.name.clone(),
                sunlight_hours: p.sunlight_hours?,
                growth_ordinal: growth_rate_ordinal(p.growth_rate?),
            })
        })
        .collect()
}

/// Image for a plant: `<image_dir>/<lowercase_name>.jpg`, if present and non-empty
pub fn plant_image_path(image_dir: &Path, plant_name: &str) -> Option<PathBuf> {
    let path = image_dir.join(format!("{}.jpg", image_file_stem(plant_name)));
    let metadata = std::fs::metadata(&path).ok()?;
    (metadata.is_file() && metadata.len() > 0).then_some(path)
}

/// Detail view of a catalog record
#[derive(Debug, Clone, Serialize)]
pub struct PlantDetails {
    pub name: String,
    pub soil_type: Option<SoilType>,
    pub watering: Option<String>,
    pub temperature: Option<Temperature>,
    pub sunlight_hours: Option<f64>,
    pub growth_rate: Option<&'static str>,
    pub height_cm: Option<f64>,
    pub image: Option<PathBuf>,
}

impl PlantDetails {
    pub fn new(plant: &PlantRecord, image_dir: &Path) -> Self {
        PlantDetails {
            name: plant.name.clone(),
            soil_type: plant.soil_type,
            watering: plant.watering.clone(),
            temperature: plant.temperature.clone(),
            sunlight_hours: plant.sunlight_hours,
            growth_rate: plant.growth_rate.map(|g| g.label()),
            height_cm: plant.height_cm,
            image: plant_image_path(image_dir, &plant.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GrowthRate;
    use std::fs;

    fn plant(name: &str, soil: Option<SoilType>, watering: &str, sun: Option<f64>, rate: Option<GrowthRate>) -> PlantRecord {
        PlantRecord {
            name: name.to_string(),
            soil_type: soil,
            watering: Some(watering.to_string()),
            temperature: None,
            sunlight_hours: sun,
            growth_rate: rate,
            height_cm: None,
        }
    }

    fn catalog() -> Vec<PlantRecord> {
        vec![
            plant("Rose", Some(SoilType::Loamy), "Moderate", Some(6.0), Some(GrowthRate::Medium)),
            plant("Aloe Vera", Some(SoilType::Sandy), "Low", Some(8.0), Some(GrowthRate::Slow)),
            plant("Rosemary", Some(SoilType::Sandy), "Low", None, Some(GrowthRate::Medium)),
            plant("Fern", Some(SoilType::Peaty), "High", Some(3.0), None),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let plants = catalog();
        let filters = PlantFilters { search: Some("ROS".into()), ..Default::default() };
        let names: Vec<&str> = filter_plants(&plants, &filters).into_iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rose", "Rosemary"]);
    }

    #[test]
    fn test_filters_combine() {
        let plants = catalog();
        let filters = PlantFilters {
            search: None,
            soil_types: vec![SoilType::Sandy, SoilType::Peaty],
            watering: vec!["low".into()],
        };
        let names: Vec<&str> = filter_plants(&plants, &filters).into_iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Aloe Vera", "Rosemary"]);

        let no_filters = PlantFilters::default();
        assert_eq!(filter_plants(&plants, &no_filters).len(), 4);
    }

    #[test]
    fn test_distinct_values_keep_first_appearance() {
        let plants = catalog();
        assert_eq!(
            distinct_soil_types(&plants),
            vec![SoilType::Loamy, SoilType::Sandy, SoilType::Peaty]
        );
        assert_eq!(distinct_watering(&plants), vec!["Moderate", "Low", "High"]);
    }

    #[test]
    fn test_growth_points_drop_incomplete_rows() {
        let points = growth_rate_points(&catalog());
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], GrowthPoint { name: "Rose".into(), sunlight_hours: 6.0, growth_ordinal: 2 });
        assert_eq!(points[1].growth_ordinal, 1);
    }

    #[test]
    fn test_image_lookup_requires_non_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("aloe_vera.jpg"), b"jpeg").unwrap();
        fs::write(dir.path().join("rose.jpg"), b"").unwrap();

        assert_eq!(
            plant_image_path(dir.path(), "Aloe Vera"),
            Some(dir.path().join("aloe_vera.jpg"))
        );
        assert_eq!(plant_image_path(dir.path(), "Rose"), None);
        assert_eq!(plant_image_path(dir.path(), "Fern"), None);
    }
}
