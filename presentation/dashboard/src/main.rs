use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod setup;
mod view;

use cli::Cli;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Terminal Dashboard Entry Point
///
/// Initializes logging, loads configuration, wires dependencies, and
/// dispatches the requested storefront view:
/// - config/: environment-backed configuration (API base URL, session)
/// - setup/: dependency injection
/// - view/: table rendering and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the requested command
    let cli = Cli::parse();
    cli::run(cli, container).await
}
