use chrono::{Datelike, NaiveDateTime, Timelike};

/// Estimate soil temperature from air temperature and wall-clock time.
///
/// This is a heuristic substituting for unavailable sensor data: soil lags
/// and damps air temperature, more so at night and outside the warm months.
/// Callers must present the result as an estimate, not a measurement.
///
/// Offsets below air temperature:
/// - daytime (6:00-17:59), April-September: 2°C
/// - daytime, other months: 3°C
/// - nighttime, April-September: 1°C
/// - nighttime, other months: 2°C
///
/// The result never falls more than 5°C below air temperature.
pub fn estimate(air_temp_c: f64, now: NaiveDateTime) -> f64 {
    let daytime = (6..18).contains(&now.hour());
    let warm_months = (4..=9).contains(&now.month());

    let offset = match (daytime, warm_months) {
        (true, true) => 2.0,
        (true, false) => 3.0,
        (false, true) => 1.0,
        (false, false) => 2.0,
    };

    (air_temp_c - offset).max(air_temp_c - 5.0)
}
