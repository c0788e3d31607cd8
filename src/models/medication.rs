use serde::{Deserialize, Serialize};

use super::enums::ReportStatus;

/// A medication on the user's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
}

/// One medication line read off a prescription by the interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrescriptionItem {
    pub medication: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub reason: String,
    /// Free text ("In 2 weeks", "On July 15th").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_appointment: Option<String>,
}

/// An uploaded prescription. Shares the report lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub file_name: String,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<PrescriptionItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
