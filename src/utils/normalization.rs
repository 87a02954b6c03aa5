//! Normalization Utilities
//!
//! Key and header normalization applied once at load time, plus the small
//! text parsers for calendar cells.

use crate::types::SeasonHeight;
use chrono::Month;
use smallvec::SmallVec;
use std::str::FromStr;

/// Case-fold and trim a plant name into its lookup key
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalize a CSV header ("  Temperature (°C) " → "temperature (°c)")
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Interpret a Yes/No calendar flag
///
/// Only "Yes" (any case) reads as `true`.
pub fn parse_yes_no(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

/// Parse a hyphen-delimited month list ("March-April-May")
///
/// Returns the recognised months in order plus the tokens that were not
/// month names, so the caller can report them.
pub fn parse_month_list(raw: &str) -> (SmallVec<[Month; 12]>, Vec<String>) {
    let mut months = SmallVec::new();
    let mut unknown = Vec::new();

    for token in raw.split('-').map(str::trim).filter(|t| !t.is_empty()) {
        match Month::from_str(token) {
            Ok(month) => months.push(month),
            Err(_) => unknown.push(token.to_string()),
        }
    }

    (months, unknown)
}

/// Parse "10-20 (Spring) | 30-45 (Summer)" into ordered season ranges
///
/// Malformed entries are returned separately instead of aborting the row.
pub fn parse_season_heights(raw: &str) -> (Vec<SeasonHeight>, Vec<String>) {
    let mut heights = Vec::new();
    let mut malformed = Vec::new();

    for entry in raw.split('|').map(str::trim).filter(|e| !e.is_empty()) {
        match parse_season_height(entry) {
            Some(height) => heights.push(height),
            None => malformed.push(entry.to_string()),
        }
    }

    (heights, malformed)
}

fn parse_season_height(entry: &str) -> Option<SeasonHeight> {
    let (range, season) = entry.split_once('(')?;
    let season = season.trim().trim_end_matches(')').trim();
    let (min, max) = range.trim().split_once('-')?;

    if season.is_empty() {
        return None;
    }

    Some(SeasonHeight {
        season: season.to_string(),
        min_cm: min.trim().parse().ok()?,
        max_cm: max.trim().parse().ok()?,
    })
}

/// File stem used for plant images: lowercase, spaces → underscores
pub fn image_file_stem(plant_name: &str) -> String {
    plant_name.to_lowercase().replace(' ', "_")
}
