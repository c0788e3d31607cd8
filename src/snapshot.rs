//! Per-user record snapshot as exported by the record store, and the
//! medication intake derived from interpreted prescriptions.

use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::messages::MessageTemplates;
use crate::analytics::parse::parse_timestamp;
use crate::analytics::types::AnalyticsError;
use crate::models::enums::ReportStatus;
use crate::models::{Medication, Prescription, Report};

/// Everything the analytics read for one user. Unknown keys in the export
/// (profile, appointments) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSnapshot {
    #[serde(default)]
    pub reports: Vec<Report>,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
    #[serde(default)]
    pub medications: Vec<Medication>,
}

impl RecordSnapshot {
    /// Load a snapshot from a JSON export on disk.
    pub fn load(path: &Path) -> Result<Self, AnalyticsError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AnalyticsError::SnapshotLoad(path.display().to_string(), e.to_string())
        })?;
        let snapshot: Self = serde_json::from_str(&json).map_err(|e| {
            AnalyticsError::SnapshotParse(path.display().to_string(), e.to_string())
        })?;

        tracing::debug!(
            path = %path.display(),
            reports = snapshot.reports.len(),
            prescriptions = snapshot.prescriptions.len(),
            medications = snapshot.medications.len(),
            "Record snapshot loaded"
        );

        Ok(snapshot)
    }

    /// Stored medications, then those read off completed prescriptions whose
    /// name (ignoring case) is not already stored.
    pub fn all_medications(&self) -> Vec<Medication> {
        let mut all = self.medications.clone();
        for prescription in &self.prescriptions {
            for med in prescription_intake(prescription).medications {
                let known = all
                    .iter()
                    .any(|m| m.name.to_lowercase() == med.name.to_lowercase());
                if !known {
                    all.push(med);
                }
            }
        }
        all
    }
}

/// Follow-up visit requested on a prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUp {
    pub title: String,
    /// Free text as written ("In 2 weeks").
    pub when: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionIntake {
    pub medications: Vec<Medication>,
    pub follow_ups: Vec<FollowUp>,
}

/// Medications and follow-ups from a completed prescription. Each medication
/// starts on the prescription's (UTC) calendar date.
pub fn prescription_intake(prescription: &Prescription) -> PrescriptionIntake {
    let Some(items) = prescription
        .results
        .as_ref()
        .filter(|_| prescription.status == ReportStatus::Completed)
    else {
        return PrescriptionIntake::default();
    };

    let start_date = match parse_timestamp(&prescription.date) {
        Some(dt) => dt.date().format("%Y-%m-%d").to_string(),
        None => {
            tracing::warn!(
                prescription_id = %prescription.id,
                "Prescription date does not parse; medications keep it verbatim"
            );
            prescription.date.clone()
        }
    };

    let mut intake = PrescriptionIntake::default();
    for item in items {
        intake.medications.push(Medication {
            id: Uuid::new_v4().to_string(),
            name: item.medication.clone(),
            start_date: start_date.clone(),
            dosage: Some(item.dosage.clone()).filter(|d| !d.is_empty()),
        });
        if let Some(when) = item.follow_up_appointment.as_ref().filter(|w| !w.is_empty()) {
            intake.follow_ups.push(FollowUp {
                title: MessageTemplates::follow_up(&item.medication),
                when: when.clone(),
            });
        }
    }
    intake
}
