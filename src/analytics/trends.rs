use chrono::NaiveDateTime;

use crate::models::enums::LabStatus;
use crate::models::{Medication, Report};

use super::messages::MessageTemplates;
use super::parse::{parse_timestamp, parse_value};
use super::reference::{
    find_medication_impact, preferred_direction, Direction, STABLE_CHANGE_THRESHOLD,
    TRACKED_TERMS,
};
use super::review::{chronological, completed_reports};
use super::types::{BiomarkerTrend, Trend};

/// One parsed observation of a term, in report order.
#[derive(Debug, Clone)]
struct DataPoint {
    value: f64,
    status: LabStatus,
}

/// First and last report dates of the analyzed history.
#[derive(Debug, Clone, Copy)]
struct ReportWindow {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl ReportWindow {
    /// Strictly inside the window. Unparseable dates never qualify.
    fn strictly_contains(&self, date: Option<NaiveDateTime>) -> bool {
        match (self.start, self.end, date) {
            (Some(start), Some(end), Some(date)) => date > start && date < end,
            _ => false,
        }
    }
}

/// Compute the trend of every tracked biomarker seen in at least two
/// completed reports. Output follows the tracked-term order.
pub fn compute_trends(reports: &[Report], medications: &[Medication]) -> Vec<BiomarkerTrend> {
    let history = chronological(completed_reports(reports));
    if history.len() < 2 {
        tracing::debug!(
            completed = history.len(),
            "Not enough completed reports for trend analysis"
        );
        return Vec::new();
    }

    let window = ReportWindow {
        start: history.first().and_then(|r| parse_timestamp(&r.date)),
        end: history.last().and_then(|r| parse_timestamp(&r.date)),
    };

    TRACKED_TERMS
        .iter()
        .filter_map(|term| analyze_term(term, &history, medications, window))
        .collect()
}

fn analyze_term(
    term: &str,
    history: &[&Report],
    medications: &[Medication],
    window: ReportWindow,
) -> Option<BiomarkerTrend> {
    let points = collect_points(term, history);
    if points.len() < 2 {
        tracing::trace!(term, points = points.len(), "Skipping term with too few values");
        return None;
    }

    let first = points.first()?;
    let last = points.last()?;

    Some(BiomarkerTrend {
        term: term.to_string(),
        trend: classify(term, first, last),
        medication_impact: attribute_medication(term, medications, window),
    })
}

/// Values of `term` across the history, skipping reports where it is absent
/// or its value does not parse.
fn collect_points(term: &str, history: &[&Report]) -> Vec<DataPoint> {
    history
        .iter()
        .filter_map(|report| report.results.iter().find(|r| r.is_term(term)))
        .filter_map(|result| {
            parse_value(&result.value).map(|value| DataPoint {
                value,
                status: result.lab_status(),
            })
        })
        .collect()
}

/// A move into or out of the normal band decides the trend; only when the
/// band is unchanged does the magnitude of change count.
fn classify(term: &str, first: &DataPoint, last: &DataPoint) -> Trend {
    match (first.status.is_normal(), last.status.is_normal()) {
        (false, true) => Trend::Improving,
        (true, false) => Trend::Worsening,
        _ => classify_magnitude(term, first.value, last.value),
    }
}

fn classify_magnitude(term: &str, first: f64, last: f64) -> Trend {
    let diff = last - first;
    let change = (diff / first).abs();

    // 0 -> 0 divides to NaN.
    if change.is_nan() || change < STABLE_CHANGE_THRESHOLD {
        return Trend::Stable;
    }

    match preferred_direction(term) {
        Some(Direction::LowerIsBetter) if diff < 0.0 => Trend::Improving,
        Some(Direction::LowerIsBetter) => Trend::Worsening,
        Some(Direction::HigherIsBetter) if diff > 0.0 => Trend::Improving,
        Some(Direction::HigherIsBetter) => Trend::Worsening,
        None => Trend::Stable,
    }
}

/// The first medication (list order) whose class affects `term` is the only
/// candidate; it is attributed when started strictly inside the window.
fn attribute_medication(
    term: &str,
    medications: &[Medication],
    window: ReportWindow,
) -> Option<String> {
    let candidate = medications.iter().find(|med| {
        find_medication_impact(&med.name).is_some_and(|impact| impact.affects(term))
    })?;

    if window.strictly_contains(parse_timestamp(&candidate.start_date)) {
        Some(MessageTemplates::medication_impact(&candidate.name))
    } else {
        None
    }
}
