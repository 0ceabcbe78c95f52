//! Display model for the result area.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::config::{PLACEHOLDER, TIME_OF_DAY_FORMAT};
use crate::models::AnalysisResult;
use crate::rules::{EMERGENCY_WARNING, NO_ANALYSIS_YET};

/// Everything the result area shows, already formatted as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPanel {
    pub diagnosis: String,
    pub recommendation: String,
    /// `"96%"`, or the placeholder when there is no confidence.
    pub confidence: String,
    pub banner_visible: bool,
    /// Sub-message inside the emergency banner; only set while visible.
    pub banner_message: Option<String>,
    /// `"Yes"`, `"No"`, or the placeholder before any analysis.
    pub emergency_indicator: String,
    /// Time of day of the last analysis, or the placeholder.
    pub last_updated: String,
}

impl ResultPanel {
    /// Panel shown at startup and after reset.
    pub fn initial() -> Self {
        Self {
            diagnosis: NO_ANALYSIS_YET.to_string(),
            recommendation: PLACEHOLDER.to_string(),
            confidence: PLACEHOLDER.to_string(),
            banner_visible: false,
            banner_message: None,
            emergency_indicator: PLACEHOLDER.to_string(),
            last_updated: PLACEHOLDER.to_string(),
        }
    }

    /// Panel for a fresh analysis stamped at `at`.
    pub fn from_result(result: &AnalysisResult, at: DateTime<Local>) -> Self {
        Self {
            diagnosis: result.diagnosis.clone(),
            recommendation: result.recommendation.clone(),
            confidence: result
                .confidence_percent
                .map(|c| format!("{c}%"))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            banner_visible: result.is_emergency,
            banner_message: result.is_emergency.then(|| EMERGENCY_WARNING.to_string()),
            emergency_indicator: if result.is_emergency { "Yes" } else { "No" }.to_string(),
            last_updated: at.format(TIME_OF_DAY_FORMAT).to_string(),
        }
    }
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::AnalysisOutcome;

    fn at_half_past_two() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 4, 14, 30, 5).unwrap()
    }

    fn result(confidence: Option<u8>, is_emergency: bool) -> AnalysisResult {
        AnalysisResult {
            outcome: AnalysisOutcome::Matched,
            diagnosis: "d".into(),
            recommendation: "r".into(),
            confidence_percent: confidence,
            is_emergency,
        }
    }

    #[test]
    fn initial_panel_is_all_placeholders() {
        let panel = ResultPanel::initial();
        assert_eq!(panel.diagnosis, NO_ANALYSIS_YET);
        assert_eq!(panel.recommendation, "—");
        assert_eq!(panel.confidence, "—");
        assert!(!panel.banner_visible);
        assert_eq!(panel.emergency_indicator, "—");
        assert_eq!(panel.last_updated, "—");
    }

    #[test]
    fn emergency_shows_banner_and_yes() {
        let panel = ResultPanel::from_result(&result(Some(96), true), at_half_past_two());
        assert_eq!(panel.confidence, "96%");
        assert!(panel.banner_visible);
        assert_eq!(panel.banner_message.as_deref(), Some(EMERGENCY_WARNING));
        assert_eq!(panel.emergency_indicator, "Yes");
    }

    #[test]
    fn non_emergency_hides_banner_and_says_no() {
        let panel = ResultPanel::from_result(&result(Some(40), false), at_half_past_two());
        assert!(!panel.banner_visible);
        assert!(panel.banner_message.is_none());
        assert_eq!(panel.emergency_indicator, "No");
    }

    #[test]
    fn missing_confidence_uses_placeholder() {
        let panel = ResultPanel::from_result(&result(None, false), at_half_past_two());
        assert_eq!(panel.confidence, "—");
    }

    #[test]
    fn timestamp_is_time_of_day() {
        let panel = ResultPanel::from_result(&result(Some(64), false), at_half_past_two());
        assert_eq!(panel.last_updated, "2:30:05 PM");
    }
}
