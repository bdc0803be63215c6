use crate::error::{PlantcastError, Result};
use serde::{Deserialize, Serialize};

/// A weather payload field as it arrives from upstream: either a bare
/// number or a unit-suffixed string like "72°F", "65%", or "12 mph".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMeasurement {
    Number(f64),
    Text(String),
}

/// Unit token detected in a source string. Conversion is decided by the
/// token alone, never inferred from magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceUnit {
    Fahrenheit,
    MilesPerHour,
    Canonical,
}

/// Normalize a heterogeneous measurement to its canonical value
/// (°C, %, or km/h depending on the field).
///
/// Fahrenheit and mph values are converted and rounded to the nearest
/// integer. A string with no leading numeric substring is a parse error,
/// never a silent zero.
pub fn normalize(raw: &RawMeasurement) -> Result<f64> {
    match raw {
        RawMeasurement::Number(n) => Ok(*n),
        RawMeasurement::Text(s) => normalize_text(s),
    }
}

fn normalize_text(s: &str) -> Result<f64> {
    let re = regex_lite::Regex::new(r"^\s*(-?\d+(?:\.\d+)?)").unwrap();
    let value: f64 = re
        .captures(s)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| PlantcastError::Parse(format!("no numeric value in '{}'", s)))?;

    Ok(match detect_unit(s) {
        SourceUnit::Fahrenheit => fahrenheit_to_celsius(value).round(),
        SourceUnit::MilesPerHour => mph_to_kmh(value).round(),
        SourceUnit::Canonical => value,
    })
}

fn detect_unit(s: &str) -> SourceUnit {
    let lower = s.to_lowercase();
    if lower.contains("mph") {
        SourceUnit::MilesPerHour
    } else if lower.contains("km/h") || lower.contains("kph") {
        SourceUnit::Canonical
    } else if lower.contains("°f") || lower.trim_end().ends_with('f') {
        SourceUnit::Fahrenheit
    } else {
        SourceUnit::Canonical
    }
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn mph_to_kmh(mph: f64) -> f64 {
    mph * 1.60934
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_fahrenheit_string() {
        // 72°F = 22.22°C, rounded to 22
        let v = normalize(&RawMeasurement::Text("72°F".into())).unwrap();
        assert_eq!(v, 22.0);
    }

    #[test]
    fn normalizes_percent_string() {
        let v = normalize(&RawMeasurement::Text("65%".into())).unwrap();
        assert_eq!(v, 65.0);
    }

    #[test]
    fn passes_through_bare_numbers() {
        let v = normalize(&RawMeasurement::Number(28.0)).unwrap();
        assert_eq!(v, 28.0);
    }

    #[test]
    fn converts_mph_to_kmh() {
        // 12 mph = 19.31 km/h, rounded to 19
        let v = normalize(&RawMeasurement::Text("12 mph".into())).unwrap();
        assert_eq!(v, 19.0);
    }

    #[test]
    fn keeps_celsius_and_kmh_unconverted() {
        assert_eq!(normalize(&RawMeasurement::Text("31°C".into())).unwrap(), 31.0);
        assert_eq!(
            normalize(&RawMeasurement::Text("14 km/h".into())).unwrap(),
            14.0
        );
    }

    #[test]
    fn preserves_fractional_unsuffixed_values() {
        let v = normalize(&RawMeasurement::Text("27.5".into())).unwrap();
        assert_eq!(v, 27.5);
    }

    #[test]
    fn handles_negative_temperatures() {
        // -4°F = -20°C
        let v = normalize(&RawMeasurement::Text("-4°F".into())).unwrap();
        assert_eq!(v, -20.0);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = normalize(&RawMeasurement::Text("N/A".into())).unwrap_err();
        assert!(matches!(err, PlantcastError::Parse(_)));
    }

    #[test]
    fn rejects_trailing_only_numbers() {
        // The numeric substring must lead the string
        let err = normalize(&RawMeasurement::Text("about 20".into())).unwrap_err();
        assert!(matches!(err, PlantcastError::Parse(_)));
    }
}
