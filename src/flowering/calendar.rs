//! Flowering/fruiting calendar counts
//!
//! Month lists become a twelve-slot occurrence count, which is then folded
//! into the four season buckets (Winter, Spring, Summer, Fall).

use crate::types::Season;
use crate::utils::{season_months, stable_argmax};
use chrono::Month;
use serde::Serialize;

/// Occurrences per calendar month, January first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyCounts([u32; 12]);

impl MonthlyCounts {
    pub fn from_months(months: &[Month]) -> Self {
        let mut counts = [0u32; 12];
        for month in months {
            counts[month.number_from_month() as usize - 1] += 1;
        }
        MonthlyCounts(counts)
    }

    pub fn get(&self, month: Month) -> u32 {
        self.0[month.number_from_month() as usize - 1]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// (month name, count) in calendar order, for charting
    pub fn by_month(&self) -> Vec<(&'static str, u32)> {
        let mut month = Month::January;
        let mut rows = Vec::with_capacity(12);
        for count in self.0 {
            rows.push((month.name(), count));
            month = month.succ();
        }
        rows
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonCount {
    pub season: Season,
    pub count: u32,
}

/// Season totals in bucket order
pub fn season_totals(counts: &MonthlyCounts) -> Vec<SeasonCount> {
    Season::ALL
        .iter()
        .map(|&season| SeasonCount {
            season,
            count: season_months(season).iter().map(|m| counts.get(*m)).sum(),
        })
        .collect()
}

/// Season with the most occurrences; ties go to the earlier bucket
///
/// None when nothing was counted at all.
pub fn peak_season(totals: &[SeasonCount]) -> Option<Season> {
    stable_argmax(totals, |t| t.count)
        .filter(|t| t.count > 0)
        .map(|t| t.season)
}
