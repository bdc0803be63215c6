use super::{Factor, FactorOutcome};
use crate::models::{ConditionAssessment, ConditionStatus, PlantingWindow, WeatherSnapshot};

/// Temperature factor
///
/// Bands (°C):
/// - 20-28: excellent, no deduction
/// - 15 to just under 20: good, -10
/// - above 28 up to 32: good, -15
/// - below 15: poor, -30
/// - above 32: poor, -30, and planting moves to the cool hours
pub struct TemperatureFactor;

impl Factor for TemperatureFactor {
    fn name(&self) -> &'static str {
        "Temperature"
    }

    fn evaluate(&self, snapshot: &WeatherSnapshot) -> FactorOutcome {
        let t = snapshot.temperature_c;
        let value = format!("{:.0}°C", t);

        if (20.0..=28.0).contains(&t) {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Excellent,
                value,
                "Ideal temperature for planting most crops",
            );
            FactorOutcome::new(assessment, 0)
        } else if (15.0..20.0).contains(&t) {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Good,
                value,
                "A little cool for warm-season crops",
            );
            FactorOutcome::new(assessment, 10)
                .with_tip("Favor cool-season crops like lettuce, peas, and cabbage")
        } else if t > 28.0 && t <= 32.0 {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Good,
                value,
                "Warm - young plants will need extra care",
            );
            FactorOutcome::new(assessment, 15)
                .with_tip("Water transplants immediately after planting")
                .with_tip("Give tender seedlings afternoon shade")
        } else if t < 15.0 {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Poor,
                value,
                "Too cold for most planting",
            );
            FactorOutcome::new(assessment, 30)
                .with_tip("Stick to cold-hardy varieties or wait for warmer weather")
        } else {
            // above 32
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Poor,
                value,
                "Heat stress risk for new plantings",
            );
            FactorOutcome::new(assessment, 30)
                .with_tip("Avoid transplanting during midday heat")
                .with_tip("If you must plant, do it at dawn and water twice daily")
                .with_window(PlantingWindow::CoolHoursOnly)
        }
    }
}
