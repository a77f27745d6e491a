mod cli;
mod core;
mod infra;
mod prompts;
mod source;
mod tools;

use clap::Parser;

use infra::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    infra::logging::init();

    let args = cli::Cli::parse();
    let cfg = Config::from_env();
    tracing::info!(server = %cfg.server_name, "BOOT weather-mcp-server");

    let service = infra::mcp::build_service(&cfg);

    if args.check {
        // Not serving, so stdout is free for human-readable output here.
        println!("✅ Configuration is valid");
        println!("   server name: {}", cfg.server_name);
        println!("   tools: {}", service.tool_names().join(", "));
        println!("   prompts: {}", service.prompt_names().join(", "));
        return Ok(());
    }

    tracing::info!("server ready to accept connections via stdio");
    if let Err(e) = infra::mcp::serve_stdio(service).await {
        tracing::error!(error = %e, "failed to start weather MCP server");
        std::process::exit(1);
    }
    Ok(())
}
