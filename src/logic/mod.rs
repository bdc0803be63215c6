pub mod forecast_rank;
pub mod gateway;
pub mod score;
pub mod season;
pub mod soil;
pub mod units;

pub use forecast_rank::ForecastRanker;
pub use gateway::WeatherGateway;
pub use score::PlantingScoreEngine;
