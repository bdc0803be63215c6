pub mod weatherapi;

pub use weatherapi::WeatherApiClient;

use crate::error::Result;
use crate::models::{ForecastDay, WeatherSnapshot};
use async_trait::async_trait;

/// Upstream weather source. The gateway owns caching and request
/// coalescing; implementations just fetch.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a location, normalized to canonical units.
    async fn current(&self, location: &str) -> Result<WeatherSnapshot>;

    /// Chronological multi-day forecast. Scoring fields are left unset for
    /// the ranker.
    async fn forecast(&self, location: &str, days: u8) -> Result<Vec<ForecastDay>>;

    /// Cheap reachability probe for the `check` subcommand.
    async fn test_connection(&self) -> Result<()>;
}
