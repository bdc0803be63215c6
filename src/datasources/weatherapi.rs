use crate::config::WeatherApiConfig;
use crate::error::{PlantcastError, Result};
use crate::logic::units::{self, RawMeasurement};
use crate::models::{ForecastDay, WeatherSnapshot};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

use super::WeatherProvider;

/// Upstream error code for an unrecognized location query.
const NO_MATCHING_LOCATION: u32 = 1006;

/// Readings outside this band are almost certainly a payload glitch; they
/// are logged but still passed through for the scorer's threshold bands to
/// absorb.
const PLAUSIBLE_TEMP_C: std::ops::RangeInclusive<f64> = -10.0..=50.0;

pub struct WeatherApiClient {
    client: reqwest::Client,
    config: WeatherApiConfig,
}

// WeatherAPI response structures
#[derive(Debug, Deserialize)]
struct ApiCurrentResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: RawMeasurement,
    humidity: RawMeasurement,
    wind_kph: RawMeasurement,
    condition: ApiCondition,
    #[serde(default)]
    vis_km: Option<RawMeasurement>,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiForecastResponse {
    forecast: ApiForecast,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Vec<ApiForecastDayRow>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDayRow {
    date: NaiveDate,
    day: ApiDaySummary,
}

#[derive(Debug, Deserialize)]
struct ApiDaySummary {
    avgtemp_c: RawMeasurement,
    mintemp_c: RawMeasurement,
    maxtemp_c: RawMeasurement,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    code: u32,
    message: String,
}

impl WeatherApiClient {
    pub fn new(config: WeatherApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn fetch_current(&self, location: &str) -> Result<WeatherSnapshot> {
        let url = format!("{}/current.json", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str()), ("q", location)])
            .send()
            .await
            .map_err(|e| PlantcastError::Upstream(format!("WeatherAPI: {}", e)))?;

        let response = Self::check_status(response, location).await?;
        let payload: ApiCurrentResponse = response
            .json()
            .await
            .map_err(|e| PlantcastError::Upstream(format!("WeatherAPI payload: {}", e)))?;

        convert_current(payload)
    }

    async fn fetch_forecast(&self, location: &str, days: u8) -> Result<Vec<ForecastDay>> {
        let url = format!("{}/forecast.json", self.config.base_url);
        let days = days.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", location),
                ("days", days.as_str()),
            ])
            .send()
            .await
            .map_err(|e| PlantcastError::Upstream(format!("WeatherAPI: {}", e)))?;

        let response = Self::check_status(response, location).await?;
        let payload: ApiForecastResponse = response
            .json()
            .await
            .map_err(|e| PlantcastError::Upstream(format!("WeatherAPI payload: {}", e)))?;

        payload
            .forecast
            .forecastday
            .into_iter()
            .map(convert_forecast_day)
            .collect()
    }

    async fn check_status(
        response: reqwest::Response,
        location: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(map_error_body(status, &body, location))
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot> {
        self.fetch_current(location).await
    }

    async fn forecast(&self, location: &str, days: u8) -> Result<Vec<ForecastDay>> {
        self.fetch_forecast(location, days).await
    }

    /// Probe the API with the caller's own address; verifies both
    /// reachability and key validity without needing a location.
    async fn test_connection(&self) -> Result<()> {
        self.fetch_current("auto:ip").await.map(|_| ())
    }
}

fn map_error_body(status: StatusCode, body: &str, location: &str) -> PlantcastError {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if parsed.error.code == NO_MATCHING_LOCATION {
            return PlantcastError::NotFound(location.to_string());
        }
        return PlantcastError::Upstream(format!(
            "WeatherAPI returned {}: {}",
            status, parsed.error.message
        ));
    }
    PlantcastError::Upstream(format!("WeatherAPI returned {}: {}", status, body))
}

fn convert_current(payload: ApiCurrentResponse) -> Result<WeatherSnapshot> {
    let temperature_c = units::normalize(&payload.current.temp_c)?;
    if !PLAUSIBLE_TEMP_C.contains(&temperature_c) {
        warn!(
            temperature_c,
            location = payload.location.name.as_str(),
            "temperature outside the plausible range, passing through as reported"
        );
    }

    let visibility_km = match &payload.current.vis_km {
        Some(raw) => Some(units::normalize(raw)?),
        None => None,
    };

    Ok(WeatherSnapshot {
        location: payload.location.name,
        temperature_c,
        humidity_percent: units::normalize(&payload.current.humidity)?,
        wind_kmh: units::normalize(&payload.current.wind_kph)?,
        description: payload.current.condition.text,
        visibility_km,
        fetched_at: Utc::now(),
        synthetic: false,
    })
}

fn convert_forecast_day(row: ApiForecastDayRow) -> Result<ForecastDay> {
    Ok(ForecastDay {
        date: row.date,
        avg_temp_c: units::normalize(&row.day.avgtemp_c)?,
        low_temp_c: units::normalize(&row.day.mintemp_c)?,
        high_temp_c: units::normalize(&row.day.maxtemp_c)?,
        description: row.day.condition.text,
        planting_score: 0,
        recommendation: String::new(),
    })
}
