use serde::{Deserialize, Serialize};

use crate::analytics::types::AnalyticsError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = AnalyticsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(AnalyticsError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(ReportStatus {
    Unanalyzed => "unanalyzed",
    Pending => "pending",
    Completed => "completed",
    Failed => "failed",
});

/// Interpreter-assigned status of a single lab value.
///
/// The interpreter is asked for High/Low/Normal but free text does come
/// back ("Borderline", "Critical High"). Anything unrecognised lands in
/// `Other` and counts as not normal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabStatus {
    High,
    Low,
    Normal,
    Other(String),
}

impl LabStatus {
    /// Classify raw status text, ignoring case only.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            "normal" => Self::Normal,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Review ordering used when listing a report's results.
    pub fn review_priority(&self) -> u8 {
        match self {
            Self::High => 1,
            Self::Low => 2,
            Self::Normal => 3,
            Self::Other(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn report_status_round_trip() {
        for (variant, s) in [
            (ReportStatus::Unanalyzed, "unanalyzed"),
            (ReportStatus::Pending, "pending"),
            (ReportStatus::Completed, "completed"),
            (ReportStatus::Failed, "failed"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ReportStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn report_status_rejects_unknown() {
        let err = ReportStatus::from_str("archived").unwrap_err();
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn report_status_serializes_lowercase() {
        let json = serde_json::to_string(&ReportStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn lab_status_is_case_insensitive() {
        assert_eq!(LabStatus::from_raw("HIGH"), LabStatus::High);
        assert_eq!(LabStatus::from_raw("low"), LabStatus::Low);
        assert_eq!(LabStatus::from_raw("Normal"), LabStatus::Normal);
    }

    #[test]
    fn lab_status_keeps_unknown_text() {
        let status = LabStatus::from_raw("Borderline");
        assert_eq!(status, LabStatus::Other("borderline".into()));
        assert!(!status.is_normal());
        assert_eq!(status.review_priority(), 4);
    }
}
