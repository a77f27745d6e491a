//! Fixed-layout weather report rendering.

use chrono::{DateTime, Local};

use crate::source::WeatherReading;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the report for an already-validated city. Pure over its inputs;
/// the caller supplies the clock reading so tests can pin it.
pub fn render(city: &str, reading: &WeatherReading, at: DateTime<Local>) -> String {
    let timestamp = at.format(TIMESTAMP_FORMAT);
    format!(
        "Weather Report for {city}\n\
         ========================\n\
         Current Temperature: {temperature}\n\
         Conditions: {conditions}\n\
         Humidity: {humidity}\n\
         Wind: {wind}\n\
         Last Updated: {timestamp}\n\
         \n\
         Note: This is sample data. Weather API integration coming soon!",
        temperature = reading.temperature,
        conditions = reading.conditions,
        humidity = reading.humidity,
        wind = reading.wind,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_reading() -> WeatherReading {
        WeatherReading {
            temperature: "84F".into(),
            conditions: "Clear".into(),
            humidity: "65%".into(),
            wind: "Light breeze".into(),
        }
    }

    #[test]
    fn report_embeds_city_and_fixed_fields() {
        let at = Local.with_ymd_and_hms(2025, 5, 1, 12, 30, 45).unwrap();
        let report = render("New York", &sample_reading(), at);
        assert!(report.starts_with("Weather Report for New York\n"));
        assert!(report.contains("Current Temperature: 84F"));
        assert!(report.contains("Conditions: Clear"));
        assert!(report.contains("Humidity: 65%"));
        assert!(report.contains("Wind: Light breeze"));
        assert!(report.contains("Last Updated: 2025-05-01 12:30:45"));
    }

    #[test]
    fn report_is_deterministic_for_a_pinned_clock() {
        let at = Local.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        let a = render("London", &sample_reading(), at);
        let b = render("London", &sample_reading(), at);
        assert_eq!(a, b);
    }

    #[test]
    fn timestamp_format_is_sortable() {
        let earlier = Local.with_ymd_and_hms(2025, 5, 1, 9, 59, 59).unwrap();
        let later = Local.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        let a = earlier.format(TIMESTAMP_FORMAT).to_string();
        let b = later.format(TIMESTAMP_FORMAT).to_string();
        assert!(a < b);
    }
}
