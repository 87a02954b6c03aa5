//! Suitability Scoring
//!
//! Linear weighted score of a season's mean conditions:
//!
//! ```text
//! temperature = max(0, 100 - |T - 24| * 5)
//! humidity    = max(0, 100 - |H - 55| * 3)
//! aqi         = max(0, 100 - (AQI - 50) * 2)
//! score       = temperature + humidity + aqi
//! ```
//!
//! The AQI term is floored at 0 but has no upper cap: an AQI below the
//! threshold lifts that term above 100.

use super::aggregation::SeasonAggregate;
use crate::config::ScoringConfig;
use crate::utils::stable_argmax;
use serde::Serialize;

/// Sub-scores and total for one set of conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub temperature: f64,
    pub humidity: f64,
    pub aqi: f64,
    pub total: f64,
}

/// Score for one aggregated season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonScore {
    pub season: String,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Score conditions with the default ideal ranges
pub fn score_season(temperature_c: f64, humidity_pct: f64, aqi: f64) -> f64 {
    score_breakdown(&ScoringConfig::default(), temperature_c, humidity_pct, aqi).total
}

/// Score conditions against a given configuration
pub fn score_breakdown(
    config: &ScoringConfig,
    temperature_c: f64,
    humidity_pct: f64,
    aqi: f64,
) -> ScoreBreakdown {
    let temperature = f64::max(
        0.0,
        100.0 - (temperature_c - config.temp_midpoint()).abs() * config.temp_penalty,
    );
    let humidity = f64::max(
        0.0,
        100.0 - (humidity_pct - config.humidity_midpoint()).abs() * config.humidity_penalty,
    );
    // Not capped at 100 when aqi < threshold
    let aqi = f64::max(0.0, 100.0 - (aqi - config.ideal_aqi_threshold) * config.aqi_penalty);

    ScoreBreakdown {
        temperature,
        humidity,
        aqi,
        total: temperature + humidity + aqi,
    }
}

/// Score every aggregate, preserving aggregation order
pub fn score_aggregates(config: &ScoringConfig, aggregates: &[SeasonAggregate]) -> Vec<SeasonScore> {
    aggregates
        .iter()
        .map(|agg| {
            let breakdown = score_breakdown(
                config,
                agg.mean_temperature_c,
                agg.mean_humidity_pct,
                agg.mean_aqi,
            );
            tracing::debug!(
                "season {}: temperature={:.1} humidity={:.1} aqi={:.1} total={:.1}",
                agg.season,
                breakdown.temperature,
                breakdown.humidity,
                breakdown.aqi,
                breakdown.total
            );
            SeasonScore {
                season: agg.season.clone(),
                score: breakdown.total,
                breakdown,
            }
        })
        .collect()
}

/// Highest-scoring season; on an exact tie the earliest one wins
pub fn best_season(scores: &[SeasonScore]) -> Option<&SeasonScore> {
    stable_argmax(scores, |s| s.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn score(season: &str, value: f64) -> SeasonScore {
        SeasonScore {
            season: season.to_string(),
            score: value,
            breakdown: ScoreBreakdown { temperature: 0.0, humidity: 0.0, aqi: 0.0, total: value },
        }
    }

    #[test]
    fn test_ideal_conditions_score_300() {
        assert_eq!(score_season(24.0, 55.0, 50.0), 300.0);
    }

    #[test]
    fn test_sub_scores_floor_at_zero() {
        let b = score_breakdown(&ScoringConfig::default(), 60.0, 0.0, 200.0);
        assert_eq!(b.temperature, 0.0);
        assert_eq!(b.humidity, 0.0);
        assert_eq!(b.aqi, 0.0);
        assert_eq!(b.total, 0.0);
    }

    #[test]
    fn test_aqi_term_exceeds_100_below_threshold() {
        let b = score_breakdown(&ScoringConfig::default(), 24.0, 55.0, 20.0);
        assert_relative_eq!(b.aqi, 160.0);
        assert_relative_eq!(b.total, 360.0);
    }

    #[test]
    fn test_monotonic_away_from_midpoints() {
        let mut previous = f64::INFINITY;
        for offset in 0..30 {
            let offset = offset as f64;
            let above = score_season(24.0 + offset, 55.0, 50.0);
            let below = score_season(24.0 - offset, 55.0, 50.0);
            assert_eq!(above, below);
            assert!(above <= previous);
            previous = above;
        }

        let mut previous = f64::INFINITY;
        for offset in 0..40 {
            let s = score_season(24.0, 55.0 + offset as f64, 50.0);
            assert!(s <= previous);
            previous = s;
        }
    }

    #[test]
    fn test_non_increasing_in_aqi_above_threshold() {
        let mut previous = f64::INFINITY;
        for aqi in 50..150 {
            let s = score_season(24.0, 55.0, aqi as f64);
            assert!(s <= previous);
            previous = s;
        }
        assert!(score_season(24.0, 55.0, 30.0) > score_season(24.0, 55.0, 50.0));
    }

    #[test]
    fn test_known_season_values() {
        // Winter: 30 + 25 + 40
        assert_relative_eq!(score_season(10.0, 30.0, 80.0), 95.0);
        // Summer: 80 + 85 + 120
        assert_relative_eq!(score_season(28.0, 60.0, 40.0), 285.0);
    }

    #[test]
    fn test_best_season_first_maximum_wins() {
        let scores = vec![score("Fall", 200.0), score("Spring", 250.0), score("Summer", 250.0)];
        for _ in 0..5 {
            assert_eq!(best_season(&scores).unwrap().season, "Spring");
        }
        assert!(best_season(&[]).is_none());
    }

    #[test]
    fn test_custom_config() {
        let config = ScoringConfig {
            ideal_temp_range: (10.0, 20.0),
            ..ScoringConfig::default()
        };
        let b = score_breakdown(&config, 15.0, 55.0, 50.0);
        assert_eq!(b.temperature, 100.0);
    }
}
