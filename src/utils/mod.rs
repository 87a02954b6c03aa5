//! Utility modules shared by the loader and the analyses
//!
//! - Normalization: name keys and header cleanup
//! - Lookup tables: static ordinal and diagnosis tables
//! - Ranking: stable argmax shared by the best-season selections

pub mod normalization;
pub mod lookup_tables;
pub mod ranking;

// Re-export commonly used helpers
pub use normalization::{normalize_header, normalize_name, parse_month_list, parse_season_heights, parse_yes_no, image_file_stem};
pub use lookup_tables::{
    growth_rate_ordinal, leaf_diagnosis, leaf_status, season_months, soil_ordinal, LeafDiagnosis,
    LeafStatus, LeafStatusKind, ISSUE_KEYWORDS,
};
pub use ranking::stable_argmax;
