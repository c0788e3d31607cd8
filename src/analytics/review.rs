//! Report-level helpers: lifecycle filtering, date ordering, and the
//! per-report result review (ordering and outlook).

use serde::{Deserialize, Serialize};

use crate::models::enums::ReportStatus;
use crate::models::{LabResult, Report};

use super::parse::parse_timestamp;

/// Completed reports, input order kept.
pub fn completed_reports(reports: &[Report]) -> Vec<&Report> {
    reports.iter().filter(|r| r.is_completed()).collect()
}

/// Oldest first. Stable, so equal dates keep input order; reports whose
/// date does not parse come before every dated report.
pub fn chronological(mut reports: Vec<&Report>) -> Vec<&Report> {
    reports.sort_by_cached_key(|r| parse_timestamp(&r.date));
    reports
}

/// Most recent completed report. Ties go to the earliest in input order.
pub fn latest_completed_report(reports: &[Report]) -> Option<&Report> {
    reports
        .iter()
        .filter(|r| r.is_completed())
        .map(|r| (parse_timestamp(&r.date), r))
        .reduce(|best, candidate| if candidate.0 > best.0 { candidate } else { best })
        .map(|(_, report)| report)
}

/// High first, then Low, Normal, anything else. Stable within a bucket.
pub fn sort_results_by_status(results: &[LabResult]) -> Vec<&LabResult> {
    let mut sorted: Vec<&LabResult> = results.iter().collect();
    sorted.sort_by_key(|r| r.lab_status().review_priority());
    sorted
}

/// Any result whose status is not "normal" (unknown text included).
pub fn has_abnormal_results(report: &Report) -> bool {
    report.is_completed() && report.results.iter().any(|r| !r.lab_status().is_normal())
}

/// At-a-glance state of a single report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportOutlook {
    /// Interpretation failed.
    Failed,
    /// Completed with at least one abnormal result.
    NeedsAttention,
    /// Completed, every result normal.
    AllNormal,
    /// Not yet interpreted.
    Awaiting,
}

pub fn report_outlook(report: &Report) -> ReportOutlook {
    match report.status {
        ReportStatus::Failed => ReportOutlook::Failed,
        ReportStatus::Completed if has_abnormal_results(report) => ReportOutlook::NeedsAttention,
        ReportStatus::Completed => ReportOutlook::AllNormal,
        ReportStatus::Unanalyzed | ReportStatus::Pending => ReportOutlook::Awaiting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(term: &str, status: &str) -> LabResult {
        LabResult {
            term: term.into(),
            status: status.into(),
            value: String::new(),
            normal_range: String::new(),
            simple_explanation: String::new(),
            actionable_advice: String::new(),
            why_it_matters: None,
            when_to_worry: None,
        }
    }

    fn make_report(id: &str, date: &str, status: ReportStatus, results: Vec<LabResult>) -> Report {
        Report {
            id: id.into(),
            date: date.into(),
            file_name: String::new(),
            results,
            status,
            error: None,
            mime_type: None,
            confidence_score: None,
            confidence_reason: None,
        }
    }

    fn ids(reports: &[&Report]) -> Vec<String> {
        reports.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn completed_filter_keeps_order() {
        let reports = vec![
            make_report("a", "2024-02-01", ReportStatus::Completed, vec![]),
            make_report("b", "2024-01-01", ReportStatus::Pending, vec![]),
            make_report("c", "2024-01-01", ReportStatus::Completed, vec![]),
            make_report("d", "2024-03-01", ReportStatus::Failed, vec![]),
        ];
        assert_eq!(ids(&completed_reports(&reports)), vec!["a", "c"]);
    }

    #[test]
    fn chronological_is_stable_and_puts_undated_first() {
        let reports = vec![
            make_report("a", "2024-03-01", ReportStatus::Completed, vec![]),
            make_report("b", "2024-01-01T12:00:00Z", ReportStatus::Completed, vec![]),
            make_report("c", "unknown", ReportStatus::Completed, vec![]),
            make_report("d", "2024-01-01T12:00:00Z", ReportStatus::Completed, vec![]),
        ];
        let sorted = chronological(reports.iter().collect());
        assert_eq!(ids(&sorted), vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn latest_completed_skips_newer_pending() {
        let reports = vec![
            make_report("a", "2024-01-01", ReportStatus::Completed, vec![]),
            make_report("b", "2024-05-01", ReportStatus::Pending, vec![]),
            make_report("c", "2024-03-01", ReportStatus::Completed, vec![]),
        ];
        assert_eq!(latest_completed_report(&reports).unwrap().id, "c");
    }

    #[test]
    fn latest_completed_tie_goes_to_first() {
        let reports = vec![
            make_report("a", "2024-03-01", ReportStatus::Completed, vec![]),
            make_report("b", "2024-03-01", ReportStatus::Completed, vec![]),
        ];
        assert_eq!(latest_completed_report(&reports).unwrap().id, "a");
    }

    #[test]
    fn latest_completed_none_when_nothing_completed() {
        let reports = vec![make_report("a", "2024-03-01", ReportStatus::Unanalyzed, vec![])];
        assert!(latest_completed_report(&reports).is_none());
    }

    #[test]
    fn results_ordered_high_low_normal_other() {
        let results = vec![
            make_result("Platelets", "Normal"),
            make_result("MCV", "Borderline"),
            make_result("Hemoglobin", "Low"),
            make_result("WBC", "High"),
            make_result("RBC", "Normal"),
        ];
        let terms: Vec<&str> = sort_results_by_status(&results)
            .iter()
            .map(|r| r.term.as_str())
            .collect();
        assert_eq!(terms, vec!["WBC", "Hemoglobin", "Platelets", "RBC", "MCV"]);
    }

    #[test]
    fn outlook_classification() {
        let abnormal = make_report(
            "a",
            "2024-01-01",
            ReportStatus::Completed,
            vec![make_result("WBC", "Normal"), make_result("RBC", "High")],
        );
        let normal = make_report(
            "b",
            "2024-01-01",
            ReportStatus::Completed,
            vec![make_result("WBC", "normal")],
        );
        let failed = make_report("c", "2024-01-01", ReportStatus::Failed, vec![]);
        let pending = make_report("d", "2024-01-01", ReportStatus::Pending, vec![]);

        assert_eq!(report_outlook(&abnormal), ReportOutlook::NeedsAttention);
        assert_eq!(report_outlook(&normal), ReportOutlook::AllNormal);
        assert_eq!(report_outlook(&failed), ReportOutlook::Failed);
        assert_eq!(report_outlook(&pending), ReportOutlook::Awaiting);
    }

    #[test]
    fn unknown_status_is_abnormal_for_review() {
        let report = make_report(
            "a",
            "2024-01-01",
            ReportStatus::Completed,
            vec![make_result("MCV", "Borderline")],
        );
        assert!(has_abnormal_results(&report));
    }
}
