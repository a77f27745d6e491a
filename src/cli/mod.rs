use clap::Parser;

#[derive(Parser)]
#[command(name = "weather-mcp-server")]
#[command(about = "Weather MCP server (stdio transport)")]
#[command(version)]
pub struct Cli {
    /// Validate configuration and registry wiring, then exit without serving.
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serving() {
        let cli = Cli::parse_from(["weather-mcp-server"]);
        assert!(!cli.check);
    }

    #[test]
    fn check_flag_parses() {
        let cli = Cli::parse_from(["weather-mcp-server", "--check"]);
        assert!(cli.check);
    }
}
