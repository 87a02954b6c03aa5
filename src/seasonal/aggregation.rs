//! Seasonal Aggregation
//!
//! Groups a plant's environmental observations by their literal season label
//! and averages each numeric column. Groups come out in ascending label
//! order; that order is also the tie-break order for best-season selection.

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{EnvironmentObservation, Season};
use crate::utils::normalize_name;
use serde::Serialize;
use std::collections::BTreeMap;

pub const TEMPERATURE_COLUMN: &str = "temperature (°C)";
pub const HUMIDITY_COLUMN: &str = "humidity (%)";
pub const AQI_COLUMN: &str = "AQI";

/// Running mean that ignores missing values
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub fn add(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    /// None when no value was ever added
    pub fn result(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / self.count as f64)
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

#[derive(Debug, Default)]
struct SeasonAccumulator {
    rows: usize,
    temperature: MeanAccumulator,
    humidity: MeanAccumulator,
    aqi: MeanAccumulator,
}

/// Per-season means for one plant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonAggregate {
    /// Label exactly as stored in the observations
    pub season: String,
    /// False when the label is not Winter/Spring/Summer/Fall
    pub recognized: bool,
    pub observation_count: usize,
    pub mean_temperature_c: f64,
    pub mean_humidity_pct: f64,
    pub mean_aqi: f64,
}

impl SeasonAggregate {
    pub fn known_season(&self) -> Option<Season> {
        Season::parse(&self.season)
    }
}

/// A season whose rows left at least one column without any usable value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncompleteSeason {
    pub season: String,
    pub observation_count: usize,
    pub missing_columns: Vec<&'static str>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SeasonGroups {
    pub complete: Vec<SeasonAggregate>,
    pub incomplete: Vec<IncompleteSeason>,
}

/// Group the observations matching `plant` by season and average them
///
/// Fails with `NoData` when no row matches. Seasons whose values are all
/// unparseable for some column are reported in `incomplete` rather than
/// producing NaN means.
pub fn aggregate_by_season(
    observations: &[EnvironmentObservation],
    plant: &str,
) -> AnalysisResult<SeasonGroups> {
    let key = normalize_name(plant);
    let mut groups: BTreeMap<&str, SeasonAccumulator> = BTreeMap::new();

    for obs in observations.iter().filter(|o| o.key == key) {
        let acc = groups.entry(obs.season.as_str()).or_default();
        acc.rows += 1;
        acc.temperature.add(obs.temperature_c);
        acc.humidity.add(obs.humidity_pct);
        acc.aqi.add(obs.aqi);
    }

    if groups.is_empty() {
        return Err(AnalysisError::NoData { plant: plant.trim().to_string() });
    }

    let mut result = SeasonGroups::default();
    for (season, acc) in groups {
        let recognized = Season::parse(season).is_some();
        if !recognized {
            tracing::warn!("{}: unrecognised season label '{}' kept as its own group", plant.trim(), season);
        }

        match (acc.temperature.result(), acc.humidity.result(), acc.aqi.result()) {
            (Some(t), Some(h), Some(a)) => result.complete.push(SeasonAggregate {
                season: season.to_string(),
                recognized,
                observation_count: acc.rows,
                mean_temperature_c: t,
                mean_humidity_pct: h,
                mean_aqi: a,
            }),
            _ => {
                let missing_columns: Vec<&'static str> = [
                    (TEMPERATURE_COLUMN, &acc.temperature),
                    (HUMIDITY_COLUMN, &acc.humidity),
                    (AQI_COLUMN, &acc.aqi),
                ]
                .into_iter()
                .filter(|(_, m)| m.count() == 0)
                .map(|(name, _)| name)
                .collect();

                tracing::warn!(
                    "{}: season '{}' has no usable {} values",
                    plant.trim(),
                    season,
                    missing_columns.join(", ")
                );
                result.incomplete.push(IncompleteSeason {
                    season: season.to_string(),
                    observation_count: acc.rows,
                    missing_columns,
                });
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn obs(name: &str, season: &str, t: Option<f64>, h: Option<f64>, a: Option<f64>) -> EnvironmentObservation {
        EnvironmentObservation::new(name, season, t, h, a)
    }

    #[test]
    fn test_means_per_season() {
        let rows = vec![
            obs("Rose", "Summer", Some(26.0), Some(60.0), Some(40.0)),
            obs("rose ", "Summer", Some(30.0), Some(50.0), Some(60.0)),
            obs("Rose", "Winter", Some(10.0), Some(30.0), Some(80.0)),
            obs("Tulip", "Summer", Some(99.0), Some(99.0), Some(99.0)),
        ];

        let groups = aggregate_by_season(&rows, "ROSE").unwrap();
        assert!(groups.incomplete.is_empty());
        assert_eq!(groups.complete.len(), 2);

        let summer = &groups.complete[0];
        assert_eq!(summer.season, "Summer");
        assert_eq!(summer.observation_count, 2);
        assert_relative_eq!(summer.mean_temperature_c, 28.0);
        assert_relative_eq!(summer.mean_humidity_pct, 55.0);
        assert_relative_eq!(summer.mean_aqi, 50.0);
    }

    #[test]
    fn test_missing_values_excluded_not_zeroed() {
        let rows = vec![
            obs("Rose", "Spring", Some(20.0), None, Some(40.0)),
            obs("Rose", "Spring", None, Some(50.0), Some(60.0)),
        ];

        let groups = aggregate_by_season(&rows, "Rose").unwrap();
        let spring = &groups.complete[0];
        assert_relative_eq!(spring.mean_temperature_c, 20.0);
        assert_relative_eq!(spring.mean_humidity_pct, 50.0);
        assert_relative_eq!(spring.mean_aqi, 50.0);
    }

    #[test]
    fn test_groups_in_label_order_unknown_labels_flagged() {
        let rows = vec![
            obs("Rose", "Winter", Some(10.0), Some(30.0), Some(80.0)),
            obs("Rose", "Monsoon", Some(25.0), Some(90.0), Some(30.0)),
            obs("Rose", "Fall", Some(15.0), Some(45.0), Some(55.0)),
        ];

        let groups = aggregate_by_season(&rows, "Rose").unwrap();
        let labels: Vec<&str> = groups.complete.iter().map(|g| g.season.as_str()).collect();
        assert_eq!(labels, vec!["Fall", "Monsoon", "Winter"]);
        assert!(!groups.complete[1].recognized);
        assert_eq!(groups.complete[0].known_season(), Some(Season::Fall));
    }

    #[test]
    fn test_all_unparseable_column_is_incomplete() {
        let rows = vec![
            obs("Rose", "Summer", Some(28.0), Some(60.0), Some(40.0)),
            obs("Rose", "Winter", Some(10.0), None, None),
        ];

        let groups = aggregate_by_season(&rows, "Rose").unwrap();
        assert_eq!(groups.complete.len(), 1);
        assert_eq!(
            groups.incomplete,
            vec![IncompleteSeason {
                season: "Winter".to_string(),
                observation_count: 1,
                missing_columns: vec![HUMIDITY_COLUMN, AQI_COLUMN],
            }]
        );
    }

    #[test]
    fn test_no_matching_rows_is_no_data() {
        let rows = vec![obs("Tulip", "Summer", Some(20.0), Some(50.0), Some(40.0))];
        let err = aggregate_by_season(&rows, "Rose").unwrap_err();
        assert_eq!(err, AnalysisError::NoData { plant: "Rose".to_string() });
    }
}
