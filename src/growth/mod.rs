//! Growth condition comparison
//!
//! - `comparator.rs` - deviation of user conditions from a plant's ideal
//! - `advice.rs` - per-field recommendations

pub mod advice;
pub mod comparator;

pub use advice::{NumericAdvice, Recommendations, SoilAdvice};
pub use comparator::{
    compare_growth, compare_growth_with, ComparisonBar, FieldDeviations, GrowthComparison,
    GrowthInput, GrowthOutlook, IdealConditions,
};
