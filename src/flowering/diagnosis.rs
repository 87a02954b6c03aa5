//! Plant condition checks
//!
//! Keyword screening of a free-text problem report and the leaf symptom
//! diagnosis that follows it.

use crate::types::LeafColor;
use crate::utils::{leaf_diagnosis, LeafDiagnosis, ISSUE_KEYWORDS};
use serde::Serialize;

/// True when the report mentions a known problem phrase
pub fn detect_growth_issue(report: &str) -> bool {
    let report = report.to_lowercase();
    ISSUE_KEYWORDS.iter().any(|kw| report.contains(kw))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionCheck {
    pub issue_detected: bool,
    /// Present only when an issue was detected and a known symptom was given
    pub diagnosis: Option<LeafDiagnosis>,
}

/// Screen a report and, if it flags a problem, diagnose the leaf symptom
pub fn check_condition(report: &str, symptom: Option<LeafColor>) -> ConditionCheck {
    let issue_detected = detect_growth_issue(report);
    let diagnosis = if issue_detected {
        symptom.and_then(leaf_diagnosis).copied()
    } else {
        None
    };

    ConditionCheck { issue_detected, diagnosis }
}
