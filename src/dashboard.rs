//! Presentation-ready bundle of every analytics view for one snapshot.

use serde::Serialize;

use crate::analytics::gauge::{chartable_results, ResultGauge};
use crate::analytics::review::{
    latest_completed_report, report_outlook, sort_results_by_status, ReportOutlook,
};
use crate::analytics::{AnalysisOutcome, HealthAnalytics};
use crate::models::LabResult;
use crate::snapshot::RecordSnapshot;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<'a> {
    pub analysis: AnalysisOutcome,
    pub risk_label: &'static str,
    pub latest_report: Option<LatestReportView<'a>>,
}

/// The most recent completed report, results in review order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestReportView<'a> {
    pub id: &'a str,
    pub date: &'a str,
    pub outlook: ReportOutlook,
    pub results: Vec<&'a LabResult>,
    pub gauges: Vec<ResultGauge>,
}

pub fn build_dashboard<'a>(
    engine: &impl HealthAnalytics,
    snapshot: &'a RecordSnapshot,
) -> Dashboard<'a> {
    let analysis = engine.analyze(snapshot);
    let risk_label = analysis.summary.risk_level.label();

    let latest_report =
        latest_completed_report(&snapshot.reports).map(|report| LatestReportView {
            id: &report.id,
            date: &report.date,
            outlook: report_outlook(report),
            results: sort_results_by_status(&report.results),
            gauges: chartable_results(report),
        });

    Dashboard {
        analysis,
        risk_label,
        latest_report,
    }
}
