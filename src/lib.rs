pub mod api;
pub mod config;
pub mod downstream;
pub mod model;

// Export API types
pub use api::handlers;
pub use api::routes;
pub use api::{ApiError, AppState};

// Export downstream client types
pub use downstream::{CallBudget, CallTimeouts, CoreClient, CoreMethod, GrpcCoreClient};

// Export all model types
pub use model::*;

use axum::Router;

/// Router with state attached, ready to serve.
pub fn build_app<C: CoreClient>(state: AppState<C>) -> Router {
    routes::create_router::<C>().with_state(state)
}

/// Run the gateway until ctrl-c or SIGTERM, then wait for in-flight
/// operations to finish.
pub async fn run_server(config: crate::config::AppConfig) -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    let core = GrpcCoreClient::connect_lazy(&config.core.endpoint, config.connect_timeout())?;
    log::info!("Core service endpoint: {}", config.core.endpoint);

    let state = AppState::new(core, config.call_timeouts());
    let operations = state.operations.clone();
    let app = build_app(state);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Client API listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let pending = operations.in_flight();
    if pending > 0 {
        log::info!("Waiting for {} in-flight operation(s)", pending);
    }
    if operations.drain(config.drain_timeout()).await {
        log::info!("Shutdown complete");
    } else {
        log::warn!(
            "Shutdown drain timed out with {} operation(s) still in flight",
            operations.in_flight()
        );
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Shutdown signal received");
}
