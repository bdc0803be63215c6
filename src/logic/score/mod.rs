pub mod engine;
pub mod humidity;
pub mod precipitation;
pub mod temperature;
pub mod wind;

pub use engine::PlantingScoreEngine;

use crate::models::{ConditionAssessment, PlantingWindow, WeatherSnapshot};

/// Result of evaluating one weather factor against a snapshot.
pub struct FactorOutcome {
    pub assessment: ConditionAssessment,
    /// Points removed from the 100-point starting score.
    pub deduction: u32,
    /// Tips in presentation order; may be empty.
    pub tips: Vec<String>,
    /// When set, replaces the recommended planting window.
    pub window_override: Option<PlantingWindow>,
}

impl FactorOutcome {
    pub fn new(assessment: ConditionAssessment, deduction: u32) -> Self {
        Self {
            assessment,
            deduction,
            tips: Vec::new(),
            window_override: None,
        }
    }

    pub fn with_tip(mut self, tip: &str) -> Self {
        self.tips.push(tip.to_string());
        self
    }

    pub fn with_window(mut self, window: PlantingWindow) -> Self {
        self.window_override = Some(window);
        self
    }
}

/// Trait for scored weather factors
pub trait Factor: Send + Sync {
    /// Display name used on the assessment
    fn name(&self) -> &'static str;

    /// Evaluate the factor. Never fails on well-formed input; out-of-range
    /// values fall into the threshold bands.
    fn evaluate(&self, snapshot: &WeatherSnapshot) -> FactorOutcome;
}
