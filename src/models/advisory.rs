use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionStatus {
    Excellent,
    Good,
    Poor,
}

impl ConditionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionStatus::Excellent => "Excellent",
            ConditionStatus::Good => "Good",
            ConditionStatus::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scored weather factor: temperature, humidity, wind, or precipitation.
/// Produced fresh on every scoring call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionAssessment {
    pub factor: String,
    pub status: ConditionStatus,
    pub value: String,
    pub feedback: String,
    pub optimal: bool,
}

impl ConditionAssessment {
    pub fn new(
        factor: &str,
        status: ConditionStatus,
        value: impl Into<String>,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            factor: factor.to_string(),
            status,
            value: value.into(),
            feedback: feedback.into(),
            optimal: status == ConditionStatus::Excellent,
        }
    }
}

/// Recommended time-of-day window for planting work. Rendered to a human
/// string at the presentation boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantingWindow {
    #[default]
    Usual,
    CoolHoursOnly,
    Anytime,
}

impl PlantingWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantingWindow::Usual => "Early morning (6-9 AM) or late afternoon (4-6 PM)",
            PlantingWindow::CoolHoursOnly => {
                "Early morning or evening only - avoid the midday heat"
            }
            PlantingWindow::Anytime => "Anytime today - cloud cover keeps conditions mild",
        }
    }
}

impl std::fmt::Display for PlantingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate advisory returned by the scoring engine. The tip list is
/// complete and ordered by factor evaluation; display truncation is a
/// presentation concern and must not happen here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingAdvisory {
    pub score: u8,
    pub assessments: Vec<ConditionAssessment>,
    pub tips: Vec<String>,
    pub advice: String,
    pub window: PlantingWindow,
}
