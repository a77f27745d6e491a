//! Canned prompt templates for weather-related conversations.

use crate::core::args;
use crate::core::error::ArgumentError;
use crate::core::prompt::{PromptArgumentSpec, PromptOutput, PromptTemplate, PromptTurn, Role};

/// Structured way to ask about conditions in a location.
#[derive(Clone, Default)]
pub struct WeatherInquiryPrompt;

impl PromptTemplate for WeatherInquiryPrompt {
    fn name(&self) -> &'static str {
        "weather_inquiry"
    }

    fn description(&self) -> &'static str {
        "Template for asking about weather conditions in a specific location"
    }

    fn arguments(&self) -> Vec<PromptArgumentSpec> {
        vec![PromptArgumentSpec {
            name: "location",
            description: "The city or location to inquire about",
            required: true,
        }]
    }

    fn build(&self, arguments: &serde_json::Value) -> Result<PromptOutput, ArgumentError> {
        let location = args::required_arg(arguments, "location")?;
        tracing::debug!(location = %location, "building weather_inquiry prompt");

        let text = format!(
            "I need current weather information for {location}. \
             Please provide the temperature and any relevant weather conditions. \
             If you need to use a tool to get this information, please do so."
        );

        Ok(PromptOutput {
            title: format!("Weather Inquiry for {location}"),
            turns: vec![PromptTurn { role: Role::User, text }],
        })
    }
}

/// Weather-based travel planning advice for a destination.
#[derive(Clone, Default)]
pub struct TravelAdvicePrompt;

impl PromptTemplate for TravelAdvicePrompt {
    fn name(&self) -> &'static str {
        "weather_travel_advice"
    }

    fn description(&self) -> &'static str {
        "Template for getting weather-based travel advice for a destination"
    }

    fn arguments(&self) -> Vec<PromptArgumentSpec> {
        vec![
            PromptArgumentSpec {
                name: "destination",
                description: "Travel destination city",
                required: true,
            },
            PromptArgumentSpec {
                name: "travel_date",
                description: "Planned travel date (optional)",
                required: false,
            },
        ]
    }

    fn build(&self, arguments: &serde_json::Value) -> Result<PromptOutput, ArgumentError> {
        let destination = args::required_arg(arguments, "destination")?;
        let travel_date = args::optional_arg(arguments, "travel_date");
        tracing::debug!(destination = %destination, travel_date = ?travel_date, "building weather_travel_advice prompt");

        let date_info = match &travel_date {
            Some(date) => format!(" for travel on {date}"),
            None => " for current conditions".to_string(),
        };

        let text = format!(
            "I'm planning to travel to {destination}{date_info}. \
             Please check the current weather conditions and provide advice on \
             what to pack and any weather-related considerations for my trip. \
             Use the weather tool to get current temperature data."
        );

        Ok(PromptOutput {
            title: format!("Travel Weather Advice for {destination}"),
            turns: vec![PromptTurn { role: Role::User, text }],
        })
    }
}
