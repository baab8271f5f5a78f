use client_api::config::AppConfig;
use client_api::run_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Info by default; transport crates only when something goes wrong.
    // RUST_LOG still overrides both.
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("h2", LevelFilter::Warn)
        .filter_module("tower", LevelFilter::Warn)
        .filter_module("hyper", LevelFilter::Warn)
        .parse_default_env()
        .init();

    log::info!("Client API: REST gateway for the core service");

    // Load configuration
    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{} core={}",
        config.server.host,
        config.server.port,
        config.core.endpoint
    );

    run_server(config).await
}
