//! Weather data source seam.
//!
//! The dispatcher only ever talks to `WeatherProvider`, so the canned
//! readings can be swapped for a live integration without touching the
//! validator or the tool wiring.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single observation for one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: String,
    pub conditions: String,
    pub humidity: String,
    pub wind: String,
}

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("weather source unavailable: {0}")]
    Unavailable(String),
}

/// Backend abstraction so the weather figures can be local or remote.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch(&self, city: &str) -> Result<WeatherReading, DataSourceError>;
}

/// Fixed readings until a live weather API is wired in.
#[derive(Clone, Default)]
pub struct CannedWeather;

#[async_trait]
impl WeatherProvider for CannedWeather {
    async fn fetch(&self, city: &str) -> Result<WeatherReading, DataSourceError> {
        tracing::debug!(city = %city, "serving canned weather reading");
        Ok(WeatherReading {
            temperature: "84F".into(),
            conditions: "Clear".into(),
            humidity: "65%".into(),
            wind: "Light breeze".into(),
        })
    }
}
