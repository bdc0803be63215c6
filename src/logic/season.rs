use crate::models::SeasonLabel;
use chrono::NaiveDate;

/// Classify a date under the two-season climate model.
pub fn season_of(date: NaiveDate) -> SeasonLabel {
    SeasonLabel::from_date(date)
}

/// Canned care tips for the current season. Contextual advice only; the
/// numeric planting score is unaffected.
pub fn seasonal_tips(season: SeasonLabel) -> &'static [&'static str] {
    match season {
        SeasonLabel::Wet => &[
            "Raise beds or add drainage so roots do not sit in waterlogged soil",
            "Watch for fungal disease after consecutive rainy days",
            "Take advantage of natural rainfall - reduce supplemental watering",
        ],
        SeasonLabel::Dry => &[
            "Water deeply in the early morning before the heat builds",
            "Mulch beds to slow evaporation from the soil surface",
            "Provide shade cloth for leafy greens during peak sun",
        ],
    }
}

/// Plants that establish well in the given season.
pub fn recommended_plants(season: SeasonLabel) -> &'static [&'static str] {
    match season {
        SeasonLabel::Wet => &["Kangkong", "Taro", "Ginger", "Sweet potato", "Okra"],
        SeasonLabel::Dry => &["Tomato", "Eggplant", "Squash", "Mung bean", "Bitter gourd"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, 1).unwrap()
    }

    #[test]
    fn wet_season_spans_june_to_october() {
        assert_eq!(season_of(date(6)), SeasonLabel::Wet);
        assert_eq!(season_of(date(8)), SeasonLabel::Wet);
        assert_eq!(season_of(date(10)), SeasonLabel::Wet);
    }

    #[test]
    fn dry_season_covers_the_rest() {
        for month in [1, 2, 3, 4, 5, 11, 12] {
            assert_eq!(season_of(date(month)), SeasonLabel::Dry);
        }
    }

    #[test]
    fn each_season_has_tips_and_plants() {
        for season in [SeasonLabel::Wet, SeasonLabel::Dry] {
            assert!(!seasonal_tips(season).is_empty());
            assert!(!recommended_plants(season).is_empty());
        }
    }
}
