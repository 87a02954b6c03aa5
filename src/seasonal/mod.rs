//! Seasonal environmental suitability
//!
//! - `aggregation.rs` - per-season means from raw observations
//! - `scoring.rs` - weighted score per season and best-season selection

pub mod aggregation;
pub mod scoring;

pub use aggregation::{aggregate_by_season, IncompleteSeason, SeasonAggregate, SeasonGroups};
pub use scoring::{best_season, score_aggregates, score_breakdown, score_season, ScoreBreakdown, SeasonScore};

use crate::config::ScoringConfig;
use crate::error::{AnalysisError, AnalysisResult};
use serde::Serialize;

/// Result of one environmental analysis request
#[derive(Debug, Clone, Serialize)]
pub struct SeasonalAnalysis {
    pub plant: String,
    pub aggregates: Vec<SeasonAggregate>,
    pub scores: Vec<SeasonScore>,
    pub best_season: String,
    /// Seasons left out of scoring because a column had no usable values
    pub incomplete: Vec<IncompleteSeason>,
}

/// Aggregate a plant's observations by season, score each season and pick the best
///
/// `NoData` when nothing matches the plant; `MissingData` when rows match
/// but no season has usable values in every column.
pub fn aggregate_by_season_and_score(
    observations: &[crate::types::EnvironmentObservation],
    plant: &str,
    config: &ScoringConfig,
) -> AnalysisResult<SeasonalAnalysis> {
    let groups = aggregate_by_season(observations, plant)?;

    if groups.complete.is_empty() {
        let missing: Vec<&str> = groups
            .incomplete
            .iter()
            .flat_map(|s| s.missing_columns.iter().copied())
            .fold(Vec::new(), |mut acc, col| {
                if !acc.contains(&col) {
                    acc.push(col);
                }
                acc
            });
        return Err(AnalysisError::missing(
            plant.trim(),
            format!("no season has usable {}", missing.join(", ")),
        ));
    }

    let scores = score_aggregates(config, &groups.complete);
    let best = best_season(&scores)
        .map(|s| s.season.clone())
        .ok_or_else(|| AnalysisError::NoData { plant: plant.trim().to_string() })?;

    tracing::debug!("{}: best season {}", plant.trim(), best);

    Ok(SeasonalAnalysis {
        plant: plant.trim().to_string(),
        aggregates: groups.complete,
        scores,
        best_season: best,
        incomplete: groups.incomplete,
    })
}
