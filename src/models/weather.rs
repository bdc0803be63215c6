use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for one location, normalized to canonical units
/// (°C, %, km/h). Immutable once returned to a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind_kmh: f64,
    pub description: String,
    pub visibility_km: Option<f64>,
    pub fetched_at: DateTime<Utc>,
    /// True only for the fallback snapshot constructed when the upstream
    /// lookup is unavailable. Real payloads always produce `false`.
    pub synthetic: bool,
}

impl WeatherSnapshot {
    /// Fallback snapshot for UX continuity when the upstream is down.
    /// Mild, unremarkable conditions; clearly flagged so consumers can
    /// tell it apart from a real observation.
    pub fn synthetic_default(location: &str, now: DateTime<Utc>) -> Self {
        Self {
            location: location.to_string(),
            temperature_c: 28.0,
            humidity_percent: 65.0,
            wind_kmh: 8.0,
            description: "Partly cloudy".to_string(),
            visibility_km: None,
            fetched_at: now,
            synthetic: true,
        }
    }
}

/// One calendar day of the upstream forecast. `planting_score` (0-8) and
/// `recommendation` are filled in by the forecast ranker; the ranker never
/// invents, drops, or reorders days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub avg_temp_c: f64,
    pub low_temp_c: f64,
    pub high_temp_c: f64,
    pub description: String,
    pub planting_score: u8,
    pub recommendation: String,
}

/// Two-season climate model used to contextualize advice. Pure function of
/// calendar month; does not affect the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonLabel {
    Wet,
    Dry,
}

impl SeasonLabel {
    /// June through October is the wet season; everything else is dry.
    pub fn from_month(month: u32) -> Self {
        match month {
            6..=10 => SeasonLabel::Wet,
            _ => SeasonLabel::Dry,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonLabel::Wet => "Wet season",
            SeasonLabel::Dry => "Dry season",
        }
    }
}

impl std::fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_label_boundaries() {
        assert_eq!(SeasonLabel::from_month(5), SeasonLabel::Dry);
        assert_eq!(SeasonLabel::from_month(6), SeasonLabel::Wet);
        assert_eq!(SeasonLabel::from_month(10), SeasonLabel::Wet);
        assert_eq!(SeasonLabel::from_month(11), SeasonLabel::Dry);
        assert_eq!(SeasonLabel::from_month(1), SeasonLabel::Dry);
    }

    #[test]
    fn synthetic_default_is_flagged() {
        let snap = WeatherSnapshot::synthetic_default("Manila", Utc::now());
        assert!(snap.synthetic);
        assert_eq!(snap.location, "Manila");
        assert!((snap.temperature_c - 28.0).abs() < f64::EPSILON);
    }
}
