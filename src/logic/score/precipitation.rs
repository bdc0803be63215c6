use super::{Factor, FactorOutcome};
use crate::models::{ConditionAssessment, ConditionStatus, PlantingWindow, WeatherSnapshot};

/// Precipitation factor, derived from the free-text condition description.
///
/// Substring checks are case-insensitive and applied in priority order:
/// clear/sunny first, then cloud-without-rain (which also relaxes the
/// planting window to anytime), then rain/drizzle, then a generic catch-all.
pub struct PrecipitationFactor;

impl Factor for PrecipitationFactor {
    fn name(&self) -> &'static str {
        "Precipitation"
    }

    fn evaluate(&self, snapshot: &WeatherSnapshot) -> FactorOutcome {
        let description = snapshot.description.to_lowercase();
        let value = snapshot.description.clone();

        if description.contains("clear") || description.contains("sunny") {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Excellent,
                value,
                "Clear skies - a fine day for garden work",
            );
            FactorOutcome::new(assessment, 0)
        } else if description.contains("cloud") && !description.contains("rain") {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Excellent,
                value,
                "Overcast - gentle conditions for transplants",
            );
            FactorOutcome::new(assessment, 0).with_window(PlantingWindow::Anytime)
        } else if description.contains("rain") || description.contains("drizzle") {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Good,
                value,
                "Wet weather - soil may be heavy to work",
            );
            FactorOutcome::new(assessment, 5)
                .with_tip("Skip watering in - let the rain settle your transplants")
        } else {
            let assessment = ConditionAssessment::new(
                self.name(),
                ConditionStatus::Good,
                value,
                "Mixed conditions - check the sky before you dig",
            );
            FactorOutcome::new(assessment, 5)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snapshot_with(description: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location: "test".into(),
            temperature_c: 24.0,
            humidity_percent: 60.0,
            wind_kmh: 5.0,
            description: description.into(),
            visibility_km: None,
            fetched_at: Utc::now(),
            synthetic: false,
        }
    }

    #[test]
    fn clear_and_sunny_are_excellent() {
        for desc in ["Clear", "Sunny", "clear skies"] {
            let outcome = PrecipitationFactor.evaluate(&snapshot_with(desc));
            assert_eq!(outcome.deduction, 0);
            assert_eq!(outcome.assessment.status, ConditionStatus::Excellent);
            assert!(outcome.window_override.is_none());
        }
    }

    #[test]
    fn cloud_without_rain_relaxes_window() {
        let outcome = PrecipitationFactor.evaluate(&snapshot_with("Partly cloudy"));
        assert_eq!(outcome.deduction, 0);
        assert_eq!(outcome.window_override, Some(PlantingWindow::Anytime));
    }

    #[test]
    fn cloud_with_rain_is_treated_as_rain() {
        let outcome = PrecipitationFactor.evaluate(&snapshot_with("Cloudy with rain"));
        assert_eq!(outcome.deduction, 5);
        assert!(outcome.window_override.is_none());
    }

    #[test]
    fn rain_and_drizzle_deduct_five() {
        for desc in ["Light rain", "Drizzle"] {
            let outcome = PrecipitationFactor.evaluate(&snapshot_with(desc));
            assert_eq!(outcome.deduction, 5);
            assert_eq!(outcome.assessment.status, ConditionStatus::Good);
        }
    }

    #[test]
    fn unknown_description_takes_generic_band() {
        let outcome = PrecipitationFactor.evaluate(&snapshot_with("Haze"));
        assert_eq!(outcome.deduction, 5);
        assert!(outcome.tips.is_empty());
    }
}
