use std::time::Instant;

use crate::models::{Medication, Report};
use crate::snapshot::RecordSnapshot;

use super::review::completed_reports;
use super::risk::compute_health_summary;
use super::trends::compute_trends;
use super::types::{AnalysisOutcome, BiomarkerTrend, HealthSummary};

/// Read-only analytics over a user's records.
pub trait HealthAnalytics {
    /// Biomarker trends across all completed reports.
    fn trends(&self, reports: &[Report], medications: &[Medication]) -> Vec<BiomarkerTrend>;

    /// Risk summary of the most recent completed report.
    fn summary(&self, reports: &[Report]) -> HealthSummary;

    /// Both views over a full snapshot.
    fn analyze(&self, snapshot: &RecordSnapshot) -> AnalysisOutcome;
}

/// Default implementation. Holds no state; the two views are independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHealthAnalytics;

impl DefaultHealthAnalytics {
    pub fn new() -> Self {
        Self
    }
}

impl HealthAnalytics for DefaultHealthAnalytics {
    fn trends(&self, reports: &[Report], medications: &[Medication]) -> Vec<BiomarkerTrend> {
        compute_trends(reports, medications)
    }

    fn summary(&self, reports: &[Report]) -> HealthSummary {
        compute_health_summary(reports)
    }

    fn analyze(&self, snapshot: &RecordSnapshot) -> AnalysisOutcome {
        let start = Instant::now();

        let medications = snapshot.all_medications();
        let trends = self.trends(&snapshot.reports, &medications);
        let summary = self.summary(&snapshot.reports);
        let completed = completed_reports(&snapshot.reports).len();

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            completed_reports = completed,
            medications = medications.len(),
            trends = trends.len(),
            risk_score = summary.risk_score,
            risk_level = summary.risk_level.as_str(),
            processing_ms = processing_time_ms,
            "Health analysis complete"
        );

        AnalysisOutcome {
            trends,
            summary,
            completed_reports: completed,
            processing_time_ms,
        }
    }
}
