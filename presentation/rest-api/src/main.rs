use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP
/// server. Configuration loading resolves the Gemini credential, so a
/// missing key aborts startup with setup instructions instead of failing
/// later on the first model call.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration (includes credential resolution)
    let config = AppConfig::load()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(config.gemini.clone());

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
