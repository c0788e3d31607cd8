use serde::{Deserialize, Serialize};

use super::enums::ReportStatus;
use super::lab::LabResult;

/// An uploaded lab report and, once interpreted, its results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    /// ISO timestamp of the report.
    pub date: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub results: Vec<LabResult>,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_reason: Option<String>,
}

impl Report {
    pub fn is_completed(&self) -> bool {
        self.status == ReportStatus::Completed
    }
}
