use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Direction of a tracked biomarker across the report history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Worsening,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Worsening => "Worsening",
            Self::Stable => "Stable",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerTrend {
    pub term: String,
    pub trend: Trend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication_impact: Option<String>,
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Coarse band over the 0-100 risk score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

// ---------------------------------------------------------------------------
// HealthSummary
// ---------------------------------------------------------------------------

/// Risk view of the most recent completed report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub primary_factors: Vec<String>,
    pub secondary_factors: Vec<String>,
    /// Insertion-ordered, no duplicates.
    pub preventive_suggestions: Vec<String>,
}

impl Default for HealthSummary {
    fn default() -> Self {
        Self {
            risk_score: 0,
            risk_level: RiskLevel::Low,
            primary_factors: Vec::new(),
            secondary_factors: Vec::new(),
            preventive_suggestions: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisOutcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub trends: Vec<BiomarkerTrend>,
    pub summary: HealthSummary,
    pub completed_reports: usize,
    pub processing_time_ms: u64,
}

// ---------------------------------------------------------------------------
// AnalyticsError
// ---------------------------------------------------------------------------

/// Failures at the edges of the engine. The analytics themselves never fail.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Snapshot load failed ({0}): {1}")]
    SnapshotLoad(String, String),

    #[error("Snapshot parse failed ({0}): {1}")]
    SnapshotParse(String, String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}
