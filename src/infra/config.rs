pub struct Config {
    pub server_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        let server_name =
            std::env::var("WEATHER_SERVER_NAME").unwrap_or_else(|_| "weather-mcp-server".into());
        Self { server_name }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_to_weather_mcp_server() {
        std::env::remove_var("WEATHER_SERVER_NAME");
        let cfg = Config::from_env();
        assert_eq!(cfg.server_name, "weather-mcp-server");
    }

    #[test]
    #[serial]
    fn parses_env_override() {
        std::env::set_var("WEATHER_SERVER_NAME", "weather-dev");
        let cfg = Config::from_env();
        assert_eq!(cfg.server_name, "weather-dev");
        std::env::remove_var("WEATHER_SERVER_NAME");
    }
}
