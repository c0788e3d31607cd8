use crate::models::enums::LabStatus;
use crate::models::{LabResult, Report};

use super::messages::MessageTemplates;
use super::reference::{
    term_weight, ABNORMAL_BASE_POINTS, HIGH_RISK_THRESHOLD, MAX_RISK_SCORE,
    MODERATE_RISK_THRESHOLD, SECONDARY_FACTOR_LIMIT,
};
use super::review::latest_completed_report;
use super::types::{HealthSummary, RiskLevel};

/// Points a single result adds to the risk score.
///
/// Only High and Low score; direction does not matter. Normal and any
/// unrecognised status contribute nothing.
pub fn score_result(result: &LabResult) -> u32 {
    match result.lab_status() {
        LabStatus::High | LabStatus::Low => ABNORMAL_BASE_POINTS * term_weight(&result.term),
        LabStatus::Normal | LabStatus::Other(_) => 0,
    }
}

/// Band for a clamped score. Each band includes its lower bound.
pub fn risk_level_for(score: u32) -> RiskLevel {
    if score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if score >= MODERATE_RISK_THRESHOLD {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Risk summary of the most recent completed report. Older reports do not
/// contribute.
pub fn compute_health_summary(reports: &[Report]) -> HealthSummary {
    let Some(latest) = latest_completed_report(reports) else {
        return HealthSummary::default();
    };

    let mut abnormal: Vec<(&LabResult, u32)> = latest
        .results
        .iter()
        .map(|r| (r, score_result(r)))
        .filter(|(_, score)| *score > 0)
        .collect();

    let total: u32 = abnormal.iter().map(|(_, score)| score).sum();
    let risk_score = total.min(MAX_RISK_SCORE);
    let risk_level = risk_level_for(risk_score);

    // Stable: equal scores keep report order.
    abnormal.sort_by(|a, b| b.1.cmp(&a.1));

    let primary_factors = abnormal
        .iter()
        .take(1)
        .map(|(r, _)| r.factor_label())
        .collect();
    let secondary_factors = abnormal
        .iter()
        .skip(1)
        .take(SECONDARY_FACTOR_LIMIT)
        .map(|(r, _)| r.factor_label())
        .collect();

    let abnormal_results: Vec<&LabResult> = abnormal.iter().map(|(r, _)| *r).collect();
    let preventive_suggestions = preventive_suggestions(risk_level, &abnormal_results);

    tracing::debug!(
        report_id = %latest.id,
        raw_score = total,
        risk_score,
        risk_level = risk_level.as_str(),
        abnormal = abnormal.len(),
        "Health summary computed"
    );

    HealthSummary {
        risk_score,
        risk_level,
        primary_factors,
        secondary_factors,
        preventive_suggestions,
    }
}

fn preventive_suggestions(level: RiskLevel, abnormal: &[&LabResult]) -> Vec<String> {
    let mut suggestions = SuggestionSet::default();

    if level == RiskLevel::High {
        suggestions.add(MessageTemplates::consult_doctor());
    }
    if abnormal
        .iter()
        .any(|r| r.is_term("hemoglobin") && r.lab_status() == LabStatus::Low)
    {
        suggestions.add(MessageTemplates::iron_rich_foods());
    }
    if abnormal
        .iter()
        .any(|r| r.is_term("wbc") && r.lab_status() == LabStatus::High)
    {
        suggestions.add(MessageTemplates::rest_and_hydration());
    }
    if level == RiskLevel::Low {
        suggestions.add(MessageTemplates::healthy_lifestyle());
    } else {
        suggestions.add(MessageTemplates::sleep_and_stress());
    }

    suggestions.into_vec()
}

/// Insertion-ordered set of suggestion texts.
#[derive(Default)]
struct SuggestionSet(Vec<String>);

impl SuggestionSet {
    fn add(&mut self, text: &str) {
        if !self.0.iter().any(|s| s == text) {
            self.0.push(text.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.0
    }
}
