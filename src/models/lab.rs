use serde::{Deserialize, Serialize};

use super::enums::LabStatus;

/// One interpreted lab value as returned by the report interpreter.
///
/// Field names follow the interpreter's PascalCase JSON. `value` and
/// `normal_range` are free text ("14.5 g/dL", "13.5 - 17.5 g/dL").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabResult {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub normal_range: String,
    #[serde(default)]
    pub simple_explanation: String,
    #[serde(default)]
    pub actionable_advice: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_it_matters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_to_worry: Option<String>,
}

impl LabResult {
    pub fn lab_status(&self) -> LabStatus {
        LabStatus::from_raw(&self.status)
    }

    /// Case-insensitive term comparison.
    pub fn is_term(&self, term: &str) -> bool {
        self.term.to_lowercase() == term.to_lowercase()
    }

    /// Display label used for contributing factors: `"<Term> (<Status>)"`.
    pub fn factor_label(&self) -> String {
        format!("{} ({})", self.term, self.status)
    }
}
