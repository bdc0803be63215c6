use crate::models::ForecastDay;

/// Compressed per-day planting score for the multi-day outlook.
///
/// Uses only the per-day average temperature and the condition text, on a
/// 0-8 scale: temperature contributes up to 5 points, the condition up to 3.
/// The full factor engine needs humidity and wind readings the daily
/// forecast rows do not carry.
pub struct ForecastRanker;

impl ForecastRanker {
    /// Score each day in place. Day order and count are preserved.
    pub fn rank(days: &mut [ForecastDay]) {
        for day in days.iter_mut() {
            let points = temperature_points(day.avg_temp_c) + condition_points(&day.description);
            day.planting_score = points;
            day.recommendation = recommendation_for(points).to_string();
        }
    }
}

fn temperature_points(avg_temp_c: f64) -> u8 {
    if (20.0..=28.0).contains(&avg_temp_c) {
        5
    } else if (15.0..20.0).contains(&avg_temp_c) || (avg_temp_c > 28.0 && avg_temp_c <= 32.0) {
        3
    } else {
        1
    }
}

fn condition_points(description: &str) -> u8 {
    let d = description.to_lowercase();
    if d.contains("clear") || d.contains("sunny") {
        3
    } else if d.contains("cloud") && !d.contains("rain") {
        2
    } else if d.contains("rain") || d.contains("drizzle") {
        1
    } else {
        0
    }
}

fn recommendation_for(points: u8) -> &'static str {
    if points >= 6 {
        "Ideal planting day"
    } else if points >= 4 {
        "Good for planting"
    } else if points >= 2 {
        "Fair - plant hardy varieties"
    } else {
        "Poor - better to wait"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(date: NaiveDate, avg_temp_c: f64, description: &str) -> ForecastDay {
        ForecastDay {
            date,
            avg_temp_c,
            low_temp_c: avg_temp_c - 4.0,
            high_temp_c: avg_temp_c + 4.0,
            description: description.into(),
            planting_score: 0,
            recommendation: String::new(),
        }
    }

    fn d(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, n).unwrap()
    }

    #[test]
    fn ideal_day_scores_eight() {
        let mut days = vec![day(d(1), 24.0, "Sunny")];
        ForecastRanker::rank(&mut days);
        assert_eq!(days[0].planting_score, 8);
        assert_eq!(days[0].recommendation, "Ideal planting day");
    }

    #[test]
    fn rainy_cold_day_is_fair() {
        let mut days = vec![day(d(1), 12.0, "Light rain")];
        ForecastRanker::rank(&mut days);
        assert_eq!(days[0].planting_score, 2);
        assert_eq!(days[0].recommendation, "Fair - plant hardy varieties");
    }

    #[test]
    fn foggy_cold_day_is_poor() {
        let mut days = vec![day(d(1), 10.0, "Freezing fog")];
        ForecastRanker::rank(&mut days);
        assert_eq!(days[0].planting_score, 1);
        assert_eq!(days[0].recommendation, "Poor - better to wait");
    }

    #[test]
    fn near_optimal_cloudy_day_is_good() {
        let mut days = vec![day(d(1), 17.0, "Partly cloudy")];
        ForecastRanker::rank(&mut days);
        assert_eq!(days[0].planting_score, 5);
        assert_eq!(days[0].recommendation, "Good for planting");
    }

    #[test]
    fn near_optimal_temperature_bands() {
        let mut days = vec![day(d(1), 17.0, "Sunny"), day(d(2), 30.0, "Sunny")];
        ForecastRanker::rank(&mut days);
        assert_eq!(days[0].planting_score, 6);
        assert_eq!(days[1].planting_score, 6);
    }

    #[test]
    fn cloudy_without_rain_beats_cloudy_with_rain() {
        let mut days = vec![
            day(d(1), 24.0, "Partly cloudy"),
            day(d(2), 24.0, "Cloudy with rain"),
        ];
        ForecastRanker::rank(&mut days);
        assert_eq!(days[0].planting_score, 7);
        assert_eq!(days[1].planting_score, 6);
    }

    #[test]
    fn order_and_count_are_preserved() {
        let mut days = vec![
            day(d(3), 24.0, "Sunny"),
            day(d(1), 10.0, "Rain"),
            day(d(2), 30.0, "Cloudy"),
        ];
        ForecastRanker::rank(&mut days);
        assert_eq!(days.len(), 3);
        let dates: Vec<NaiveDate> = days.iter().map(|x| x.date).collect();
        assert_eq!(dates, vec![d(3), d(1), d(2)]);
    }
}
