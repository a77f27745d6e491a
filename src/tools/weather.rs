use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use serde_json::json;

use crate::core::args;
use crate::core::error::ArgumentError;
use crate::core::tool::{Tool, ToolError};
use crate::source::WeatherProvider;
use crate::tools::report;

/// Typed request for `get_weather`, built once at the dispatch boundary so
/// the handler body never sees raw JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetWeatherRequest {
    pub city: String,
}

impl GetWeatherRequest {
    pub fn from_args(arguments: &serde_json::Value) -> Result<Self, ArgumentError> {
        let city = args::required_string(arguments, "city")?;
        Ok(Self { city })
    }
}

/// The one callable operation: weather report for a city.
pub struct GetWeatherTool {
    source: Arc<dyn WeatherProvider>,
}

impl GetWeatherTool {
    pub fn new(source: Arc<dyn WeatherProvider>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Tool for GetWeatherTool {
    fn name(&self) -> &'static str {
        "get_weather"
    }

    fn description(&self) -> &'static str {
        "Get current weather information for a specified city. \
         Returns temperature data for the requested location."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "Name of the city to get weather for (e.g., 'New York', 'London', 'Tokyo')"
                }
            },
            "required": ["city"]
        })
    }

    async fn call(&self, arguments: &serde_json::Value) -> Result<String, ToolError> {
        let req = GetWeatherRequest::from_args(arguments)?;
        tracing::info!(city = %req.city, "processing weather request");

        let reading = self.source.fetch(&req.city).await?;
        let report = report::render(&req.city, &reading, Local::now());

        tracing::debug!(city = %req.city, "returning weather data");
        Ok(report)
    }
}
