use serde::{Deserialize, Serialize};

use super::enums::AnalysisOutcome;

/// Result of one analysis request. Recomputed every time, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub outcome: AnalysisOutcome,
    pub diagnosis: String,
    pub recommendation: String,
    /// `None` when nothing was selected.
    pub confidence_percent: Option<u8>,
    pub is_emergency: bool,
}
