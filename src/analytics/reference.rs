//! Fixed lookup tables for trend and risk analysis.
//!
//! Lookup keys are lowercase. Table order matters where the first match wins.

/// Biomarkers analyzed for trends, in output order.
pub const TRACKED_TERMS: [&str; 5] = ["Hemoglobin", "RBC", "WBC", "Platelets", "Hematocrit"];

/// Relative change below which a magnitude comparison is Stable.
pub const STABLE_CHANGE_THRESHOLD: f64 = 0.05;

/// Points per unit of term weight for an abnormal result.
pub const ABNORMAL_BASE_POINTS: u32 = 20;

pub const MAX_RISK_SCORE: u32 = 100;
pub const HIGH_RISK_THRESHOLD: u32 = 60;
pub const MODERATE_RISK_THRESHOLD: u32 = 30;

/// How many abnormal results after the primary one become secondary factors.
pub const SECONDARY_FACTOR_LIMIT: usize = 2;

/// Which way a tracked biomarker should move to count as improving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

/// Preferred direction for a tracked term. Terms without one never trend
/// on magnitude alone.
pub fn preferred_direction(term: &str) -> Option<Direction> {
    match term {
        "WBC" => Some(Direction::LowerIsBetter),
        "Hemoglobin" | "RBC" | "Hematocrit" => Some(Direction::HigherIsBetter),
        _ => None,
    }
}

/// Intended effect of a medication class on its biomarkers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredEffect {
    Decrease,
    Increase,
}

/// A medication class and the biomarkers it is expected to move.
#[derive(Debug, Clone, Copy)]
pub struct MedicationImpact {
    /// Lowercase substring matched against the medication name.
    pub key: &'static str,
    pub biomarkers: &'static [&'static str],
    pub desired_effect: DesiredEffect,
}

pub static MEDICATION_IMPACTS: [MedicationImpact; 4] = [
    MedicationImpact {
        key: "statin",
        biomarkers: &["ldl", "cholesterol"],
        desired_effect: DesiredEffect::Decrease,
    },
    MedicationImpact {
        key: "metformin",
        biomarkers: &["hba1c", "glucose"],
        desired_effect: DesiredEffect::Decrease,
    },
    MedicationImpact {
        key: "levothyroxine",
        biomarkers: &["tsh"],
        desired_effect: DesiredEffect::Decrease,
    },
    MedicationImpact {
        key: "iron",
        biomarkers: &["hemoglobin", "hematocrit", "rbc"],
        desired_effect: DesiredEffect::Increase,
    },
];

impl MedicationImpact {
    pub fn affects(&self, term: &str) -> bool {
        let lower = term.to_lowercase();
        self.biomarkers.iter().any(|b| *b == lower)
    }
}

/// Find the medication class a medication name belongs to (first key wins).
pub fn find_medication_impact(medication_name: &str) -> Option<&'static MedicationImpact> {
    let lower = medication_name.to_lowercase();
    MEDICATION_IMPACTS.iter().find(|m| lower.contains(m.key))
}

const TERM_WEIGHTS: [(&str, u32); 5] = [
    ("hemoglobin", 3),
    ("wbc", 2),
    ("platelets", 2),
    ("rbc", 1),
    ("hematocrit", 1),
];

/// Risk weight of a term; unlisted terms weigh 1.
pub fn term_weight(term: &str) -> u32 {
    let lower = term.to_lowercase();
    TERM_WEIGHTS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, weight)| *weight)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_case_insensitive() {
        assert_eq!(term_weight("Hemoglobin"), 3);
        assert_eq!(term_weight("WBC"), 2);
        assert_eq!(term_weight("platelets"), 2);
        assert_eq!(term_weight("Hematocrit"), 1);
    }

    #[test]
    fn unlisted_term_weighs_one() {
        assert_eq!(term_weight("Glucose"), 1);
        assert_eq!(term_weight(""), 1);
    }

    #[test]
    fn medication_matched_by_substring() {
        let impact = find_medication_impact("Ferrous Iron 65mg").unwrap();
        assert_eq!(impact.key, "iron");
        assert_eq!(impact.desired_effect, DesiredEffect::Increase);
        assert!(impact.affects("Hemoglobin"));
        assert!(!impact.affects("WBC"));
    }

    #[test]
    fn statin_class_covers_brand_suffix() {
        let impact = find_medication_impact("Atorvastatin 20mg").unwrap();
        assert_eq!(impact.key, "statin");
        assert!(impact.affects("LDL"));
    }

    #[test]
    fn unknown_medication_has_no_impact() {
        assert!(find_medication_impact("Lisinopril").is_none());
    }

    #[test]
    fn directions_for_tracked_terms() {
        assert_eq!(preferred_direction("WBC"), Some(Direction::LowerIsBetter));
        assert_eq!(preferred_direction("Hematocrit"), Some(Direction::HigherIsBetter));
        assert_eq!(preferred_direction("Platelets"), None);
    }
}
