//! Two-segment gauge placing a result's value against its reference range.

use serde::{Deserialize, Serialize};

use crate::models::enums::LabStatus;
use crate::models::{LabResult, Report};

use super::parse::{parse_range, parse_value, ValueRange};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SegmentKind {
    /// The measured value, up to itself.
    Measured,
    /// Distance from the measured value up to the range's upper bound.
    Remainder,
    /// The reference range up to its upper bound, drawn under an excess.
    Reference,
    /// How far a high value exceeds the upper bound.
    Excess,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GaugeSegment {
    pub kind: SegmentKind,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultGauge {
    pub term: String,
    pub value: f64,
    pub range: (f64, f64),
    pub segments: [GaugeSegment; 2],
}

/// Gauge for one result, or `None` when its value or range does not parse.
///
/// Segment values are not clamped; a low value above a reversed range can
/// produce a negative remainder.
pub fn result_gauge(result: &LabResult) -> Option<ResultGauge> {
    let value = parse_value(&result.value)?;
    let ValueRange { low, high } = parse_range(&result.normal_range)?;

    let segments = match result.lab_status() {
        LabStatus::High => [
            GaugeSegment { kind: SegmentKind::Reference, value: high },
            GaugeSegment { kind: SegmentKind::Excess, value: value - high },
        ],
        LabStatus::Low | LabStatus::Normal | LabStatus::Other(_) => [
            GaugeSegment { kind: SegmentKind::Measured, value },
            GaugeSegment { kind: SegmentKind::Remainder, value: high - value },
        ],
    };

    Some(ResultGauge {
        term: result.term.clone(),
        value,
        range: (low, high),
        segments,
    })
}

/// Gauges for every chartable result of a completed report, in result order.
pub fn chartable_results(report: &Report) -> Vec<ResultGauge> {
    if !report.is_completed() {
        return Vec::new();
    }
    report.results.iter().filter_map(result_gauge).collect()
}
