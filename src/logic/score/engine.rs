use super::{
    humidity::HumidityFactor, precipitation::PrecipitationFactor, temperature::TemperatureFactor,
    wind::WindFactor, Factor,
};
use crate::models::{PlantingAdvisory, PlantingWindow, WeatherSnapshot};
use tracing::debug;

/// Evaluates every weather factor against a snapshot and folds the outcomes
/// into a single advisory.
///
/// Scoring starts at 100 and each factor's deduction is subtracted; the
/// result is floored at 0. Factors run in a fixed order (temperature,
/// humidity, wind, precipitation) so assessments and tips always come back
/// in the same sequence for the same snapshot.
pub struct PlantingScoreEngine {
    factors: Vec<Box<dyn Factor>>,
}

impl PlantingScoreEngine {
    pub fn new() -> Self {
        let factors: Vec<Box<dyn Factor>> = vec![
            Box::new(TemperatureFactor),
            Box::new(HumidityFactor),
            Box::new(WindFactor),
            Box::new(PrecipitationFactor),
        ];

        Self { factors }
    }

    pub fn score(&self, snapshot: &WeatherSnapshot) -> PlantingAdvisory {
        let mut total: i32 = 100;
        let mut assessments = Vec::with_capacity(self.factors.len());
        let mut tips = Vec::new();
        let mut window = PlantingWindow::default();

        for factor in &self.factors {
            let outcome = factor.evaluate(snapshot);
            debug!(
                factor = outcome.assessment.factor.as_str(),
                deduction = outcome.deduction,
                "factor evaluated"
            );
            total -= outcome.deduction as i32;
            assessments.push(outcome.assessment);
            tips.extend(outcome.tips);
            if let Some(w) = outcome.window_override {
                window = w;
            }
        }

        let score = total.max(0) as u8;

        PlantingAdvisory {
            score,
            assessments,
            tips,
            advice: advice_for(score).to_string(),
            window,
        }
    }
}

impl Default for PlantingScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn advice_for(score: u8) -> &'static str {
    if score >= 90 {
        "Perfect day for planting! All conditions are optimal for most plants."
    } else if score >= 75 {
        "Great conditions for planting. Minor adjustments may help."
    } else if score >= 60 {
        "Good conditions overall, but take a few precautions."
    } else {
        "Challenging conditions today. Consider waiting or protect your plants well."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConditionStatus;
    use chrono::Utc;

    fn snapshot(temp_c: f64, humidity: f64, wind_kmh: f64, description: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location: "test".into(),
            temperature_c: temp_c,
            humidity_percent: humidity,
            wind_kmh,
            description: description.into(),
            visibility_km: None,
            fetched_at: Utc::now(),
            synthetic: false,
        }
    }

    #[test]
    fn optimal_snapshot_scores_a_perfect_hundred() {
        let advisory = PlantingScoreEngine::new().score(&snapshot(24.0, 60.0, 5.0, "Clear"));
        assert_eq!(advisory.score, 100);
        assert!(advisory.tips.is_empty());
        assert_eq!(advisory.window, PlantingWindow::Usual);
        assert_eq!(
            advisory.advice,
            "Perfect day for planting! All conditions are optimal for most plants."
        );
        assert!(advisory.assessments.iter().all(|a| a.optimal));
    }

    #[test]
    fn assessments_come_back_in_factor_order() {
        let advisory = PlantingScoreEngine::new().score(&snapshot(24.0, 60.0, 5.0, "Clear"));
        let names: Vec<&str> = advisory
            .assessments
            .iter()
            .map(|a| a.factor.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Temperature", "Humidity", "Wind", "Precipitation"]
        );
    }

    #[test]
    fn degrading_one_factor_lowers_the_score() {
        let engine = PlantingScoreEngine::new();
        let good = engine.score(&snapshot(24.0, 60.0, 5.0, "Clear")).score;
        let hot = engine.score(&snapshot(35.0, 60.0, 5.0, "Clear")).score;
        assert!(hot < good);
    }

    #[test]
    fn threshold_edge_between_28_and_29_degrees() {
        let engine = PlantingScoreEngine::new();
        assert_eq!(engine.score(&snapshot(28.0, 60.0, 5.0, "Clear")).score, 100);
        assert_eq!(engine.score(&snapshot(29.0, 60.0, 5.0, "Clear")).score, 85);
    }

    #[test]
    fn worst_case_never_goes_below_zero() {
        let advisory = PlantingScoreEngine::new().score(&snapshot(40.0, 95.0, 50.0, "Heavy rain"));
        assert_eq!(advisory.score, 25);
        assert_eq!(
            advisory.advice,
            "Challenging conditions today. Consider waiting or protect your plants well."
        );
        assert!(advisory
            .assessments
            .iter()
            .any(|a| a.status == ConditionStatus::Poor));
    }

    #[test]
    fn later_window_override_wins() {
        // 35°C asks for cool hours; cloud cover later relaxes to anytime.
        let advisory = PlantingScoreEngine::new().score(&snapshot(35.0, 60.0, 5.0, "Cloudy"));
        assert_eq!(advisory.window, PlantingWindow::Anytime);
    }

    #[test]
    fn heat_alone_sets_cool_hours_window() {
        let advisory = PlantingScoreEngine::new().score(&snapshot(35.0, 60.0, 5.0, "Clear"));
        assert_eq!(advisory.window, PlantingWindow::CoolHoursOnly);
    }

    #[test]
    fn tips_accumulate_across_factors() {
        let advisory = PlantingScoreEngine::new().score(&snapshot(30.0, 75.0, 15.0, "Light rain"));
        // temperature 2 + humidity 1 + wind 1 + precipitation 1
        assert_eq!(advisory.tips.len(), 5);
    }
}
