//! First-match rule evaluation over the chosen symptoms.
//!
//! Pure: the same selection always yields the same result. Demographics
//! are accepted and logged but do not influence the outcome.

use crate::models::{AnalysisOutcome, AnalysisResult, Demographics, Rule};
use crate::rules::{
    FALLBACK_CONFIDENCE, FALLBACK_DIAGNOSIS, FALLBACK_RECOMMENDATION, NOTHING_SELECTED_DIAGNOSIS,
    RULES,
};
use crate::selection::ChosenSet;

/// Analyzes the selection against the built-in rule table.
pub fn analyze(chosen: &ChosenSet, demographics: &Demographics) -> AnalysisResult {
    analyze_with(RULES, chosen.as_slice(), demographics)
}

/// Analyzes `chosen` against `rules`, in declaration order.
pub fn analyze_with<S: AsRef<str>>(
    rules: &[Rule],
    chosen: &[S],
    demographics: &Demographics,
) -> AnalysisResult {
    tracing::debug!(
        age = demographics.age,
        sex = %demographics.sex,
        weight = demographics.weight,
        height = demographics.height,
        "Demographics received (not used by rule evaluation)"
    );

    if chosen.is_empty() {
        return AnalysisResult {
            outcome: AnalysisOutcome::NothingSelected,
            diagnosis: NOTHING_SELECTED_DIAGNOSIS.to_string(),
            recommendation: crate::config::PLACEHOLDER.to_string(),
            confidence_percent: None,
            is_emergency: false,
        };
    }

    match first_match(rules, chosen) {
        Some((index, rule)) => {
            tracing::debug!(rule = index + 1, diagnosis = rule.diagnosis, "Rule matched");
            AnalysisResult {
                outcome: AnalysisOutcome::Matched,
                diagnosis: rule.diagnosis.to_string(),
                recommendation: rule.recommendation.to_string(),
                confidence_percent: Some(rule.confidence),
                is_emergency: rule.is_emergency,
            }
        }
        None => {
            tracing::debug!(count = chosen.len(), "No rule matched, using fallback");
            AnalysisResult {
                outcome: AnalysisOutcome::Fallback,
                diagnosis: FALLBACK_DIAGNOSIS.to_string(),
                recommendation: FALLBACK_RECOMMENDATION.to_string(),
                confidence_percent: Some(FALLBACK_CONFIDENCE),
                is_emergency: false,
            }
        }
    }
}

/// The first rule (with its index) that matches any chosen symptom.
pub fn first_match<'r, S: AsRef<str>>(
    rules: &'r [Rule],
    chosen: &[S],
) -> Option<(usize, &'r Rule)> {
    rules.iter().enumerate().find(|(_, rule)| rule.matches(chosen))
}
