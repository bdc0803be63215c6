use super::{Factor, FactorOutcome};
use crate::models::{ConditionAssessment, ConditionStatus, WeatherSnapshot};

/// Humidity factor
///
/// Bands (% relative humidity):
/// - 50-70: excellent, no deduction
/// - 40 to just under 50, or above 70 up to 80: good, -10
/// - below 40: poor, -20
/// - above 80: poor, -20
pub struct HumidityFactor;

impl Factor for HumidityFactor {
    fn name(&self) -> &'static str {
        "Humidity"
    }

    fn evaluate(&self, snapshot: &WeatherSnapshot) -> FactorOutcome {
        let h = snapshot.humidity_percent;
        let value = format!("{:.0}%", h);

        if (50.0..=70.0).contains(&h) {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Excellent,
                value,
                "Comfortable humidity for transplanting",
            );
            FactorOutcome::new(assessment, 0)
        } else if (40.0..50.0).contains(&h) {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Good,
                value,
                "Air is on the dry side",
            );
            FactorOutcome::new(assessment, 10)
                .with_tip("Plan to water a bit more often until plants establish")
        } else if h > 70.0 && h <= 80.0 {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Good,
                value,
                "Humid - fungal pressure is elevated",
            );
            FactorOutcome::new(assessment, 10)
                .with_tip("Leave extra spacing for air circulation to head off disease")
        } else if h < 40.0 {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Poor,
                value,
                "Very dry air will stress new plantings",
            );
            FactorOutcome::new(assessment, 20)
                .with_tip("Water frequently until plants establish")
                .with_tip("Mulch around plantings to hold soil moisture")
        } else {
            // above 80
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Poor,
                value,
                "Very humid - high disease risk",
            );
            FactorOutcome::new(assessment, 20)
                .with_tip("Consider a preventive fungicide on susceptible crops")
                .with_tip("Maximize airflow - avoid crowding new plants")
        }
    }
}
