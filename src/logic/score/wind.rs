use super::{Factor, FactorOutcome};
use crate::models::{ConditionAssessment, ConditionStatus, WeatherSnapshot};

/// Wind factor
///
/// Bands (km/h):
/// - up to 10: excellent, no deduction
/// - up to 20: good, -5
/// - up to 30: good, -10
/// - above 30: poor, -20
pub struct WindFactor;

impl Factor for WindFactor {
    fn name(&self) -> &'static str {
        "Wind"
    }

    fn evaluate(&self, snapshot: &WeatherSnapshot) -> FactorOutcome {
        let w = snapshot.wind_kmh;
        let value = format!("{:.0} km/h", w);

        if w <= 10.0 {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Excellent,
                value,
                "Calm conditions - safe for delicate seedlings",
            );
            FactorOutcome::new(assessment, 0)
        } else if w <= 20.0 {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Good,
                value,
                "A light breeze - generally fine for planting",
            );
            FactorOutcome::new(assessment, 5)
                .with_tip("A steady breeze dries foliage and helps prevent disease")
        } else if w <= 30.0 {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Good,
                value,
                "Breezy - tall transplants may flop",
            );
            FactorOutcome::new(assessment, 10)
                .with_tip("Stake tall or top-heavy transplants at planting time")
        } else {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Poor,
                value,
                "Too windy for safe transplanting",
            );
            FactorOutcome::new(assessment, 20)
                .with_tip("Delay planting or put up a temporary windbreak")
                .with_tip("Shield seedlings with cloches or row covers")
        }
    }
}
