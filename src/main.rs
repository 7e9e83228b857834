use anyhow::Result;
use clap::Parser;
use generation_gateway::gateway::Gateway;
use generation_gateway::models::Config;
use generation_gateway::server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "generation-gateway")]
#[command(about = "Forward text and image generation requests to an AI provider")]
struct CliArgs {
    /// Listen port, overriding the PORT environment variable.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generation_gateway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting generation-gateway");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let port = args.port.unwrap_or(config.port);
    let gateway = Arc::new(Gateway::from_config(&config));

    if let Err(e) = server::serve(gateway, port).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
