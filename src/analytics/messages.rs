/// Patient-facing text produced by the analytics.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Attribution of a biomarker trend to a medication.
    pub fn medication_impact(medication: &str) -> String {
        format!("Trend after starting {}.", medication)
    }

    pub fn consult_doctor() -> &'static str {
        "Consult your doctor soon to discuss these results."
    }

    pub fn iron_rich_foods() -> &'static str {
        "Consider iron-rich foods like spinach, lentils, and red meat."
    }

    pub fn rest_and_hydration() -> &'static str {
        "Focus on rest and hydration as your body may be fighting an infection."
    }

    pub fn healthy_lifestyle() -> &'static str {
        "Continue maintaining your healthy lifestyle and regular check-ups."
    }

    pub fn sleep_and_stress() -> &'static str {
        "Ensure you are getting adequate sleep and managing stress levels."
    }

    /// Title of a follow-up appointment derived from a prescription.
    pub fn follow_up(medication: &str) -> String {
        format!("Follow-up for {}", medication)
    }
}
